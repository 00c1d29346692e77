//! Terminal user interface and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and the page widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod handlers;
pub mod help_overlay;
pub mod page;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::config::Config;
use crate::constants::{APP_NAME, SCROLL_STEP};
use crate::filter::SkillSelection;
use crate::models::Portfolio;
use crate::reveal::{intersection_ratio, RevealRegistry, SectionId};
use crate::toast::{Toast, ToastKind};

pub use help_overlay::HelpOverlayState;
pub use page::PageDocument;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Application state for the portfolio viewer.
pub struct AppState {
    // Core data
    /// Loaded portfolio content
    pub portfolio: Portfolio,
    /// Application configuration
    pub config: Config,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// First visible document row
    pub scroll: usize,
    /// Active skills filter pill
    pub filter: SkillSelection,
    /// One-shot reveal state per section
    pub reveal: RevealRegistry,
    /// Active toast, if any
    pub toast: Toast,
    /// Help overlay state while open
    pub help_overlay: Option<HelpOverlayState>,

    // Geometry cached from the last laid-out frame, used by key
    // handlers that run between draws
    /// Page viewport height in rows
    pub viewport_rows: usize,
    /// Largest valid scroll offset
    pub max_scroll: usize,
    section_tops: [Option<usize>; SectionId::ALL.len()],

    // System resources
    clipboard: Box<dyn Clipboard>,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the app state with the OS clipboard.
    #[must_use]
    pub fn new(portfolio: Portfolio, config: Config) -> Self {
        Self::with_clipboard(portfolio, config, Box::new(SystemClipboard::new()))
    }

    /// Creates the app state with a caller-provided clipboard seam.
    #[must_use]
    pub fn with_clipboard(
        portfolio: Portfolio,
        config: Config,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let help_overlay = config
            .ui
            .show_help_on_startup
            .then(HelpOverlayState::new);
        Self {
            portfolio,
            config,
            theme,
            scroll: 0,
            filter: SkillSelection::default(),
            reveal: RevealRegistry::new(),
            toast: Toast::new(),
            help_overlay,
            viewport_rows: 0,
            max_scroll: 0,
            section_tops: [None; SectionId::ALL.len()],
            clipboard,
            should_quit: false,
        }
    }

    /// Per-frame housekeeping ahead of the draw.
    pub fn tick(&mut self, now: Instant) {
        self.toast.clear_expired(now);
    }

    /// Lays the page out for the given viewport and feeds the reveal
    /// observations for the resulting scroll position.
    ///
    /// Returns the document so the caller can render the visible
    /// slice. Scroll is clamped against the fresh layout first, so a
    /// resize can never leave the view past the end of the document.
    pub fn layout_frame(&mut self, width: u16, height: u16, now: Instant) -> PageDocument {
        let doc = PageDocument::build(&self.portfolio, self.filter, &self.theme, width);
        self.viewport_rows = usize::from(height);
        self.max_scroll = doc.max_scroll(self.viewport_rows);
        if self.scroll > self.max_scroll {
            self.scroll = self.max_scroll;
        }
        for id in SectionId::ALL {
            if let Some((top, section_height)) = doc.section_extent(id) {
                self.section_tops[id as usize] = Some(top);
                let ratio =
                    intersection_ratio(self.scroll, self.viewport_rows, top, section_height);
                self.reveal.observe(id, ratio, now);
            }
        }
        doc
    }

    /// Scroll down by the line step.
    pub fn scroll_down(&mut self) {
        self.scroll = (self.scroll + SCROLL_STEP).min(self.max_scroll);
    }

    /// Scroll up by the line step.
    pub const fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(SCROLL_STEP);
    }

    /// Scroll down by one viewport.
    pub fn page_down(&mut self) {
        self.scroll = (self.scroll + self.viewport_rows).min(self.max_scroll);
    }

    /// Scroll up by one viewport.
    pub const fn page_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(self.viewport_rows);
    }

    /// Jump to the top of the page.
    pub const fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    /// Jump to the end of the page.
    pub const fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll;
    }

    /// Scrolls so the given section starts at the top of the viewport.
    pub fn jump_to_section(&mut self, id: SectionId) {
        if let Some(top) = self.section_tops[id as usize] {
            self.scroll = top.min(self.max_scroll);
        }
    }

    /// Advances the skills filter to the next pill.
    pub fn next_filter(&mut self) {
        self.filter = self.filter.next();
    }

    /// Moves the skills filter to the previous pill.
    pub fn previous_filter(&mut self) {
        self.filter = self.filter.previous();
    }

    /// Copies the contact email and raises the matching toast.
    ///
    /// Clipboard failure is normal on headless systems and downgrades
    /// to a warning toast pointing at the on-screen address.
    pub fn copy_email(&mut self, now: Instant) {
        let email = self.portfolio.links.email.clone();
        match self.clipboard.set_text(&email) {
            Ok(()) => self.toast.show(ToastKind::Success, "Email copied", now),
            Err(_) => self.toast.show(
                ToastKind::Warning,
                "Clipboard unavailable - copy the address from the contact section",
                now,
            ),
        }
    }

    /// Cycles the theme mode auto -> dark -> light and applies it.
    pub fn cycle_theme(&mut self) {
        self.config.ui.theme_mode = self.config.ui.theme_mode.cycle();
        self.theme = Theme::from_mode(self.config.ui.theme_mode);
    }

    /// Opens or closes the help overlay.
    pub fn toggle_help(&mut self) {
        if self.help_overlay.is_some() {
            self.help_overlay = None;
        } else {
            self.help_overlay = Some(HelpOverlayState::new());
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        state.tick(Instant::now());

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events; the short timeout keeps fades and toast
        // expiry ticking between key presses
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    if handlers::handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Resize(_, _) => {
                    // Terminal resized, re-laid out on the next draw
                }
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &mut AppState) {
    let theme = state.theme.clone();

    // Fill entire screen with theme background color first
    // This ensures consistent background regardless of terminal settings
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Page
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    // Page first so the title bar reads this frame's scroll extents
    render_page(f, chunks[1], state, &theme);
    render_title_bar(f, chunks[0], state, &theme);
    StatusBar::render(f, chunks[2], state, &theme);

    if let Some(help) = &state.help_overlay {
        help.render(f, f.area(), &theme);
    }
}

/// Render title bar with the profile identity and scroll position
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let percent = if state.max_scroll == 0 {
        100
    } else {
        (state.scroll * 100) / state.max_scroll
    };
    let title = Line::from(vec![
        Span::styled(
            format!(" {APP_NAME} "),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(theme.text_muted)),
        Span::styled(
            state.portfolio.profile.name.clone(),
            Style::default().fg(theme.text_secondary),
        ),
        Span::styled(
            format!(" · {}", state.portfolio.profile.title),
            Style::default().fg(theme.text_muted),
        ),
        Span::styled(
            format!("  [theme: {}]  {percent:>3}%", state.config.ui.theme_mode.label()),
            Style::default().fg(theme.text_muted),
        ),
    ]);

    let title_widget = Paragraph::new(title)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Lay out the page for this frame and render the visible slice
fn render_page(f: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let now = Instant::now();
    let doc = state.layout_frame(area.width, area.height, now);
    let lines = doc.render_lines(
        state.scroll,
        usize::from(area.height),
        &state.reveal,
        state.config.ui.reduce_motion,
        now,
        theme,
    );

    let page = Paragraph::new(lines).style(Style::default().bg(theme.background));
    f.render_widget(page, area);
}
