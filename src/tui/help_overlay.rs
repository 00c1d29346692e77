//! Help overlay widget showing all keyboard shortcuts.
//!
//! This module provides a scrollable help overlay accessible via '?' key
//! that documents navigation, the skills filter, and the copy action.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

use super::Theme;

/// State for the help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlayState {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    /// Total number of content lines
    total_lines: usize,
}

impl HelpOverlayState {
    /// Creates a new help overlay state.
    #[must_use]
    pub fn new() -> Self {
        // Line count is theme-independent, so any theme works here
        let content = Self::help_content(&Theme::dark());
        let total_lines = content.len();
        Self {
            scroll_offset: 0,
            total_lines,
        }
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub const fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines {
            self.scroll_offset += 1;
        }
    }

    /// Scroll to the top.
    pub const fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    fn shortcut(key: &str, description: &str, theme: &Theme) -> Line<'static> {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{key:<14}"), Style::default().fg(theme.success)),
            Span::styled(description.to_string(), Style::default().fg(theme.text)),
        ])
    }

    fn heading(label: &str, theme: &Theme) -> Line<'static> {
        Line::from(Span::styled(
            format!("═══ {label} ═══"),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ))
    }

    fn tip(text: &str, theme: &Theme) -> Line<'static> {
        Line::from(Span::styled(
            format!("  • {text}"),
            Style::default().fg(theme.text),
        ))
    }

    /// Get the help content organized by category.
    fn help_content(theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                "LazyFolio - Keyboard Shortcuts",
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Self::heading("NAVIGATION", theme),
            Line::from(""),
            Self::shortcut("j / ↓", "Scroll down", theme),
            Self::shortcut("k / ↑", "Scroll up", theme),
            Self::shortcut("Space / PgDn", "Page down", theme),
            Self::shortcut("b / PgUp", "Page up", theme),
            Self::shortcut("g / Home", "Jump to top", theme),
            Self::shortcut("G / End", "Jump to bottom", theme),
            Line::from(""),
            Self::heading("SECTIONS", theme),
            Line::from(""),
            Self::shortcut("1", "Jump to About", theme),
            Self::shortcut("2", "Jump to Skills", theme),
            Self::shortcut("3", "Jump to Experience", theme),
            Self::shortcut("4", "Jump to Contact", theme),
            Line::from(""),
            Self::heading("SKILLS FILTER", theme),
            Line::from(""),
            Self::shortcut("Tab", "Next filter pill", theme),
            Self::shortcut("Shift+Tab", "Previous filter pill", theme),
            Line::from(""),
            Self::heading("ACTIONS", theme),
            Line::from(""),
            Self::shortcut("c", "Copy email address", theme),
            Self::shortcut("t", "Cycle theme (auto/dark/light)", theme),
            Line::from(""),
            Self::heading("SYSTEM", theme),
            Line::from(""),
            Self::shortcut("?", "Toggle this help overlay", theme),
            Self::shortcut("Esc", "Close help", theme),
            Self::shortcut("q / Ctrl+C", "Quit", theme),
            Line::from(""),
            Self::heading("TIPS", theme),
            Line::from(""),
            Self::tip("Sections fade in the first time they scroll into view", theme),
            Self::tip("The filter only changes the Skills grid; order is kept", theme),
            Self::tip("Theme changes are saved back to the config file", theme),
            Line::from(""),
        ];
        lines.push(Line::from(Span::styled(
            "Press '?' or Esc to close • ↑↓ to scroll",
            Style::default().fg(theme.text_muted),
        )));
        lines
    }

    /// Render the help overlay as a centered modal.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        // Centered modal size (60% width, 80% height)
        let width = (area.width * 60) / 100;
        let height = (area.height * 80) / 100;
        let x = (area.width.saturating_sub(width)) / 2;
        let y = (area.height.saturating_sub(height)) / 2;

        let modal_area = Rect {
            x: x + area.x,
            y: y + area.y,
            width,
            height,
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        let content_area = chunks[0];
        let scrollbar_area = chunks[1];

        let content = Self::help_content(theme);

        // Account for borders
        let visible_height = content_area.height.saturating_sub(2) as usize;
        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .title(" Help ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .style(Style::default().fg(theme.text).bg(theme.background))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, content_area);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .style(Style::default().fg(theme.primary));

        let mut scrollbar_state =
            ScrollbarState::new(self.total_lines.saturating_sub(visible_height))
                .position(self.scroll_offset);

        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

impl Default for HelpOverlayState {
    fn default() -> Self {
        Self::new()
    }
}
