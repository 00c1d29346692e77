//! System clipboard access behind a narrow seam.

use anyhow::Result;

/// Writes text to a clipboard.
///
/// The copy-email action talks to the clipboard only through this
/// trait, so tests can stand in a fake that fails on demand. A failed
/// write is expected on headless systems and surfaces as a warning
/// toast, never as a crash.
pub trait Clipboard {
    /// Places `text` on the clipboard.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The OS clipboard via `arboard`. A fresh handle is opened per write.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Creates the system clipboard handle.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_owned()))?;
        Ok(())
    }
}
