//! Clipboard port.
//!
//! A single write operation behind a trait so the orchestration can be
//! tested without touching the system clipboard. Write failures map to the
//! non-fatal `Clipboard` error variant.

use std::sync::Mutex;

use adfontes_core::{AdFontesError, Result};

/// Write access to a clipboard.
pub trait Clipboard: Send + Sync {
    /// Writes `text`, replacing the current clipboard contents.
    fn write_text(&self, text: &str) -> Result<()>;
}

/// System clipboard backed by `arboard`.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| AdFontesError::clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| AdFontesError::clipboard(e.to_string()))
    }
}

/// In-memory clipboard for tests.
#[derive(Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last written text, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().expect("clipboard lock").clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        *self.contents.lock().expect("clipboard lock") = Some(text.to_string());
        Ok(())
    }
}
