//! Transient status toasts with a self-expiring deadline.
//!
//! A toast is shown by the copy-email action and disappears on its
//! own. The deadline travels with the message: showing a new toast
//! replaces both, so a clear scheduled by an earlier show can never
//! blank a newer message. The event loop calls [`Toast::clear_expired`]
//! every tick.

use std::time::Instant;

use crate::constants::TOAST_DURATION;

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Confirmation, e.g. after a successful copy.
    Success,
    /// Degraded but not fatal, e.g. clipboard unavailable.
    Warning,
}

/// A short-lived message for the status bar.
#[derive(Debug, Default)]
pub struct Toast {
    current: Option<(ToastKind, String, Instant)>,
}

impl Toast {
    /// Creates an empty toast slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a message and restarts the clear countdown.
    ///
    /// Re-triggering within the countdown replaces the message and
    /// pushes the deadline out, so the toast clears exactly once,
    /// a full duration after the most recent show.
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) {
        self.current = Some((kind, message.into(), now + TOAST_DURATION));
    }

    /// Clears the toast once its deadline has passed.
    ///
    /// Returns true only for the call that actually cleared it.
    pub fn clear_expired(&mut self, now: Instant) -> bool {
        match &self.current {
            Some((_, _, deadline)) if now >= *deadline => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// The visible message, if any.
    #[must_use]
    pub fn message(&self) -> Option<(ToastKind, &str)> {
        self.current
            .as_ref()
            .map(|(kind, text, _)| (*kind, text.as_str()))
    }

    /// Whether a toast is currently visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}
