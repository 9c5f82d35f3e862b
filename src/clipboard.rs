//! Clipboard output for finished summaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write clipboard: {0}")]
    WriteFailed(String),
}

/// Destination for a finished summary.
pub trait ClipboardWriter {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard via arboard.
///
/// Opened lazily on first write so a headless session only fails the write,
/// not the whole run.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::WriteFailed(e.to_string())),
            None => Err(ClipboardError::Unavailable("not initialised".to_string())),
        }
    }
}
