//! System clipboard access.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Failed to initialize clipboard: {0}")]
    Init(#[source] arboard::Error),

    #[error("Failed to set clipboard text: {0}")]
    Write(#[source] arboard::Error),
}

/// Copies the given text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(|e| {
        tracing::error!(error = %e, "Failed to initialize clipboard");
        ClipboardError::Init(e)
    })?;
    clipboard.set_text(text).map_err(|e| {
        tracing::error!(error = %e, "Failed to set clipboard text");
        ClipboardError::Write(e)
    })
}
