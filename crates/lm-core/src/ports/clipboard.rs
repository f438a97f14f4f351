//! Clipboard port - abstracts host clipboard access.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard does not contain text")]
    NotText,
}

/// Read access to the system clipboard.
///
/// The paste command consumes exactly one payload per invocation; the payload
/// is never persisted.
#[async_trait]
pub trait ClipboardPort: Send + Sync {
    /// Read the current clipboard content as text.
    async fn read_text(&self) -> Result<String, ClipboardError>;
}
