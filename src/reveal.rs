//! One-shot reveal tracking for page sections.
//!
//! Sections below the fold start hidden and fade in the first time
//! enough of them scrolls into the viewport. Revealing is strictly
//! monotonic: once a section has shown it stays shown for the rest of
//! the run, and its observation is closed so later scroll positions
//! cannot affect it. The hero block and footer are always visible and
//! never tracked here.

use std::time::Instant;

use crate::constants::{REVEAL_DURATION, REVEAL_THRESHOLD};

/// The four anchored sections that fade in on first sight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    /// Summary and focus/strength mini-cards.
    About,
    /// Filterable skills grid.
    Skills,
    /// Work history timeline.
    Experience,
    /// Contact card with the copy-email action.
    Contact,
}

impl SectionId {
    /// All sections, in page order.
    pub const ALL: [Self; 4] = [Self::About, Self::Skills, Self::Experience, Self::Contact];

    /// Section heading as rendered on the page.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Contact => "Contact",
        }
    }
}

/// Reveal state for a single section.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevealState {
    shown: bool,
    revealed_at: Option<Instant>,
}

impl RevealState {
    /// Feeds one intersection observation.
    ///
    /// Returns true only for the observation that reveals the section.
    /// Once shown the state ignores every further observation, so the
    /// flag can never revert when the section scrolls back out.
    pub fn observe(&mut self, ratio: f32, now: Instant) -> bool {
        if self.shown {
            return false;
        }
        if ratio >= REVEAL_THRESHOLD {
            self.shown = true;
            self.revealed_at = Some(now);
            return true;
        }
        false
    }

    /// Whether the section has revealed.
    #[must_use]
    pub const fn is_shown(&self) -> bool {
        self.shown
    }

    /// Eased transition progress in `[0, 1]`.
    ///
    /// 0 until the section reveals, then an ease-out cubic over the
    /// transition duration, saturating at 1.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        match self.revealed_at {
            None => 0.0,
            Some(at) => {
                let elapsed = now.saturating_duration_since(at);
                if elapsed >= REVEAL_DURATION {
                    1.0
                } else {
                    ease_out_cubic(elapsed.as_secs_f32() / REVEAL_DURATION.as_secs_f32())
                }
            }
        }
    }
}

/// Reveal state for every section on the page.
#[derive(Debug, Default)]
pub struct RevealRegistry {
    states: [RevealState; SectionId::ALL.len()],
}

impl RevealRegistry {
    /// Creates a registry with every section unshown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds an observation for one section. No-op once shown.
    pub fn observe(&mut self, id: SectionId, ratio: f32, now: Instant) -> bool {
        self.states[id as usize].observe(ratio, now)
    }

    /// Whether the given section has revealed.
    #[must_use]
    pub fn is_shown(&self, id: SectionId) -> bool {
        self.states[id as usize].is_shown()
    }

    /// Transition progress for the given section.
    #[must_use]
    pub fn progress(&self, id: SectionId, now: Instant) -> f32 {
        self.states[id as usize].progress(now)
    }
}

/// Fraction of a section's rows currently inside the viewport.
///
/// Overlap rows divided by the section's total rows, in `[0, 1]`.
/// A zero-height section has ratio 0, so it can never reveal; a
/// section taller than the viewport caps below 1.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn intersection_ratio(
    viewport_top: usize,
    viewport_height: usize,
    section_top: usize,
    section_height: usize,
) -> f32 {
    if section_height == 0 || viewport_height == 0 {
        return 0.0;
    }
    let overlap_top = viewport_top.max(section_top);
    let overlap_bottom = (viewport_top + viewport_height).min(section_top + section_height);
    if overlap_bottom <= overlap_top {
        return 0.0;
    }
    (overlap_bottom - overlap_top) as f32 / section_height as f32
}

/// Ease-out cubic curve: fast start, gentle settle.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
