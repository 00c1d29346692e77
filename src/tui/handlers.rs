//! Input handlers for the main page and the help overlay.

use anyhow::Result;
use crossterm::event::{self, KeyCode, KeyModifiers};
use std::time::Instant;

use crate::reveal::SectionId;

use super::AppState;

/// Route a key event to the active context.
///
/// Returns true when the application should exit.
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if state.help_overlay.is_some() {
        return handle_help_input(state, key);
    }
    handle_main_input(state, key)
}

/// Handle input while the help overlay is open
pub fn handle_help_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match key.code {
        // Close help with Escape or '?'
        KeyCode::Esc | KeyCode::Char('?') => {
            state.help_overlay = None;
            Ok(false)
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.should_quit = true;
            Ok(true)
        }
        KeyCode::Char('q') => {
            state.should_quit = true;
            Ok(true)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(help) = &mut state.help_overlay {
                help.scroll_up();
            }
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if let Some(help) = &mut state.help_overlay {
                help.scroll_down();
            }
            Ok(false)
        }
        KeyCode::Home | KeyCode::Char('g') => {
            if let Some(help) = &mut state.help_overlay {
                help.scroll_to_top();
            }
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle input for the main page
pub fn handle_main_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.should_quit = true;
            Ok(true)
        }
        KeyCode::Char('q') => {
            state.should_quit = true;
            Ok(true)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.scroll_down();
            Ok(false)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.scroll_up();
            Ok(false)
        }
        KeyCode::PageDown | KeyCode::Char(' ') => {
            state.page_down();
            Ok(false)
        }
        KeyCode::PageUp | KeyCode::Char('b') => {
            state.page_up();
            Ok(false)
        }
        KeyCode::Home | KeyCode::Char('g') => {
            state.scroll_to_top();
            Ok(false)
        }
        KeyCode::End | KeyCode::Char('G') => {
            state.scroll_to_bottom();
            Ok(false)
        }
        KeyCode::Char('1') => {
            state.jump_to_section(SectionId::About);
            Ok(false)
        }
        KeyCode::Char('2') => {
            state.jump_to_section(SectionId::Skills);
            Ok(false)
        }
        KeyCode::Char('3') => {
            state.jump_to_section(SectionId::Experience);
            Ok(false)
        }
        KeyCode::Char('4') => {
            state.jump_to_section(SectionId::Contact);
            Ok(false)
        }
        KeyCode::Tab => {
            state.next_filter();
            Ok(false)
        }
        KeyCode::BackTab => {
            state.previous_filter();
            Ok(false)
        }
        KeyCode::Char('c') => {
            state.copy_email(Instant::now());
            Ok(false)
        }
        KeyCode::Char('t') => {
            state.cycle_theme();
            // Best-effort persistence; the session keeps the mode either way
            let _ = state.config.save();
            Ok(false)
        }
        KeyCode::Char('?') => {
            state.toggle_help();
            Ok(false)
        }
        _ => Ok(false),
    }
}
