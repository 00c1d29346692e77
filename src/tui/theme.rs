//! Theme system for consistent UI colors across dark and light modes.
//!
//! This module provides a centralized theme management system that automatically
//! detects the OS theme (dark/light mode) and applies appropriate colors. Every
//! color is a concrete RGB value so the reveal fade can interpolate between the
//! background and a target color; named terminal colors have no channels to
//! interpolate.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
///
/// Provides consistent colors across all UI components with support
/// for both dark and light terminal backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for headings, borders, and emphasis
    pub primary: Color,
    /// Accent color for the active filter pill, monogram, and key hints
    pub accent: Color,
    /// Success toasts and the availability badge
    pub success: Color,
    /// Warning toasts, e.g. the clipboard fallback
    pub warning: Color,

    /// Primary text content color
    pub text: Color,
    /// Secondary text for section subtitles and company lines
    pub text_secondary: Color,
    /// Muted text for hints, periods, and the footer
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Surface color for pills, chips, and cards
    pub surface: Color,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    ///
    /// This uses the `dark-light` crate to detect whether the OS is in
    /// dark or light mode, and returns the matching theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves a configured theme mode to a concrete theme.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Creates the dark theme: near-black background with zinc text
    /// tones and an emerald accent.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Rgb(228, 228, 231),
            accent: Color::Rgb(52, 211, 153),
            success: Color::Rgb(16, 185, 129),
            warning: Color::Rgb(245, 158, 11),

            text: Color::Rgb(212, 212, 216),
            text_secondary: Color::Rgb(161, 161, 170),
            text_muted: Color::Rgb(113, 113, 122),

            background: Color::Rgb(7, 7, 10),
            surface: Color::Rgb(24, 24, 27),
        }
    }

    /// Creates the light theme with darkened accents for contrast.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(39, 39, 42),
            accent: Color::Rgb(5, 150, 105),
            success: Color::Rgb(4, 120, 87),
            warning: Color::Rgb(180, 83, 9),

            text: Color::Rgb(24, 24, 27),
            text_secondary: Color::Rgb(63, 63, 70),
            text_muted: Color::Rgb(113, 113, 122),

            background: Color::Rgb(250, 250, 250),
            surface: Color::Rgb(228, 228, 231),
        }
    }

    /// The color a fading element shows at `progress`, rising from the
    /// background toward `target`.
    #[must_use]
    pub fn faded(&self, target: Color, progress: f32) -> Color {
        blend(self.background, target, progress)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

/// Linear blend between two colors; `t` 0 gives `from`, 1 gives `to`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let lerp =
                |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
            Color::Rgb(lerp(r1, r2), lerp(g1, g2), lerp(b1, b2))
        }
        // Non-RGB colors have no channels to interpolate; snap instead.
        _ => {
            if t < 0.5 {
                from
            } else {
                to
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_dark() {
        let theme = Theme::dark();
        assert_eq!(theme.background, Color::Rgb(7, 7, 10));
        assert_eq!(theme.text, Color::Rgb(212, 212, 216));
        assert_ne!(theme.primary, theme.accent);
        assert_ne!(theme.success, theme.warning);
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::light();
        assert_eq!(theme.background, Color::Rgb(250, 250, 250));
        assert_eq!(theme.text, Color::Rgb(24, 24, 27));
        assert_ne!(theme.text, theme.background);
    }

    #[test]
    fn test_from_mode() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }

    #[test]
    fn test_theme_detect_does_not_panic() {
        let theme = Theme::detect();
        assert!(theme == Theme::dark() || theme == Theme::light());
    }

    #[test]
    fn test_blend_endpoints() {
        let from = Color::Rgb(0, 0, 0);
        let to = Color::Rgb(200, 100, 50);
        assert_eq!(blend(from, to, 0.0), from);
        assert_eq!(blend(from, to, 1.0), to);
    }

    #[test]
    fn test_blend_midpoint() {
        let mixed = blend(Color::Rgb(0, 0, 0), Color::Rgb(100, 200, 50), 0.5);
        assert_eq!(mixed, Color::Rgb(50, 100, 25));
    }

    #[test]
    fn test_blend_clamps_t() {
        let from = Color::Rgb(10, 10, 10);
        let to = Color::Rgb(20, 20, 20);
        assert_eq!(blend(from, to, -1.0), from);
        assert_eq!(blend(from, to, 2.0), to);
    }

    #[test]
    fn test_blend_non_rgb_snaps() {
        assert_eq!(blend(Color::Black, Color::White, 0.2), Color::Black);
        assert_eq!(blend(Color::Black, Color::White, 0.8), Color::White);
    }

    #[test]
    fn test_faded_rises_from_background() {
        let theme = Theme::dark();
        assert_eq!(theme.faded(theme.text, 0.0), theme.background);
        assert_eq!(theme.faded(theme.text, 1.0), theme.text);
    }
}
