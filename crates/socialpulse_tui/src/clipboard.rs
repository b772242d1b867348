//! System clipboard access.

use socialpulse_error::{ClipboardError, SocialPulseResult};
use tracing::debug;

/// Write-only clipboard.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> SocialPulseResult<()>;
}

/// The desktop clipboard, opened on first use.
///
/// The handle is kept for the life of the form because on X11 the copied
/// text disappears when its owner is dropped.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Create a clipboard that connects lazily.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> SocialPulseResult<()> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => {
                debug!("Opening system clipboard");
                arboard::Clipboard::new().map_err(|e| ClipboardError::new(e.to_string()))?
            }
        };
        self.inner
            .insert(clipboard)
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::new(e.to_string()))?;
        Ok(())
    }
}
