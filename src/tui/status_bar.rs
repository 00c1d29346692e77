//! Status bar widget for displaying toasts, filter state, and key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::filter::filter_skills;
use crate::toast::ToastKind;

use super::{AppState, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with the active toast and contextual hints
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let status_line = if let Some((kind, message)) = state.toast.message() {
            let (symbol, color) = match kind {
                ToastKind::Success => ("✓", theme.success),
                ToastKind::Warning => ("⚠", theme.warning),
            };
            Line::from(vec![
                Span::styled(
                    format!("{symbol} {message}"),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ])
        } else {
            let shown = filter_skills(&state.portfolio.skills, state.filter).len();
            let total = state.portfolio.skills.len();
            Line::from(vec![
                Span::styled("Filter: ", Style::default().fg(theme.primary)),
                Span::styled(state.filter.label(), Style::default().fg(theme.accent)),
                Span::styled(
                    format!("  ({shown}/{total} skills)"),
                    Style::default().fg(theme.text_muted),
                ),
            ])
        };

        let help_line = Self::help_line(state.help_overlay.is_some(), theme);

        let status = Paragraph::new(vec![status_line, help_line])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Key hints for the current context
    fn hints(help_open: bool) -> Vec<(&'static str, &'static str)> {
        if help_open {
            vec![("?/Esc", "Close help"), ("j/k", "Scroll")]
        } else {
            vec![
                ("j/k", "Scroll"),
                ("1-4", "Sections"),
                ("Tab", "Filter"),
                ("c", "Copy email"),
                ("?", "Help"),
                ("q", "Quit"),
            ]
        }
    }

    fn help_line(help_open: bool, theme: &Theme) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.primary)));

        for (i, (key, action)) in Self::hints(help_open).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(key, Style::default().fg(theme.accent)));
            spans.push(Span::raw(": "));
            spans.push(Span::raw(action));
        }

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_hints_cover_core_actions() {
        let hints = StatusBar::hints(false);
        let keys: Vec<&str> = hints.iter().map(|(key, _)| *key).collect();
        assert!(keys.contains(&"c"));
        assert!(keys.contains(&"Tab"));
        assert!(keys.contains(&"q"));
    }

    #[test]
    fn test_help_context_hints() {
        let hints = StatusBar::hints(true);
        assert_eq!(hints[0].0, "?/Esc");
    }
}
