//! System clipboard adapter backed by clipboard-rs.

use async_trait::async_trait;
use clipboard_rs::{Clipboard, ClipboardContext};
use tokio::task::spawn_blocking;

use lm_core::ports::{ClipboardError, ClipboardPort};

/// Reads the host clipboard.
///
/// The clipboard context is created inside `spawn_blocking` per call: the
/// platform handles are not `Send`, and a paste happens at human frequency,
/// so the setup cost is irrelevant.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClipboardPort for SystemClipboard {
    async fn read_text(&self) -> Result<String, ClipboardError> {
        spawn_blocking(|| {
            let context = ClipboardContext::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            context
                .get_text()
                .map_err(|_| ClipboardError::NotText)
        })
        .await
        .map_err(|e| ClipboardError::Unavailable(e.to_string()))?
    }
}
