//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the timing values that drive
//! the reveal animation and the status toast.

use std::time::Duration;

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "LazyFolio";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "lazyfolio";

/// Minimum fraction of a section that must be inside the viewport
/// before the section reveals. Revealing is one-shot: once a section
/// has crossed this ratio it stays shown for the rest of the run.
pub const REVEAL_THRESHOLD: f32 = 0.12;

/// Length of the reveal transition (fade plus settle offset).
pub const REVEAL_DURATION: Duration = Duration::from_millis(700);

/// Rows a section body is displaced downward at the start of its
/// reveal transition. The offset shrinks to zero as the transition
/// completes and is always clipped to the section extent.
pub const REVEAL_OFFSET_ROWS: u16 = 2;

/// How long a toast stays in the status bar after its most recent
/// trigger. Re-triggering within this window restarts the countdown.
pub const TOAST_DURATION: Duration = Duration::from_millis(1800);

/// Rows scrolled per line-scroll key press.
pub const SCROLL_STEP: usize = 2;
