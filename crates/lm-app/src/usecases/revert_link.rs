use anyhow::Result;
use log::debug;
use std::sync::Arc;

use lm_core::document::{locate_revert_span, LineSpan, Position};
use lm_core::ports::{EditorError, EditorPort};

use crate::session::Session;

/// What the escape-revert command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevertOutcome {
    /// The link was replaced with the bare original URL; slot cleared.
    Reverted,
    /// The line no longer matches the recorded URL; nothing was touched and
    /// the slot stays pending.
    Stale,
    /// No revert was pending.
    Idle,
}

/// The escape-revert command: restore the inserted `[title](url)` back to the
/// bare original URL.
///
/// Acts only while a revert is pending. The scan is anchored on the recorded
/// insertion span rather than the caret: the post-paste caret sits past the
/// closing `)` (whole-link selection for fallback inserts), and the command
/// must still work from there. Recorded offsets are never trusted blindly;
/// the line content is re-validated against the recorded URL before
/// mutating, because the user may have edited the link after insertion.
pub struct RevertLinkUseCase {
    editor: Arc<dyn EditorPort>,
    session: Arc<Session>,
}

impl RevertLinkUseCase {
    pub fn new(editor: Arc<dyn EditorPort>, session: Arc<Session>) -> Self {
        Self { editor, session }
    }

    pub async fn execute(&self) -> Result<RevertOutcome> {
        let Some(pending) = self.session.pending_revert() else {
            return Ok(RevertOutcome::Idle);
        };

        let line_no = pending.inserted.line;
        let line = match self.editor.line_text(line_no).await {
            Ok(line) => line,
            // The recorded line no longer exists; the link is gone with it.
            Err(EditorError::LineOutOfBounds(_)) => return Ok(RevertOutcome::Stale),
            Err(err) => return Err(err.into()),
        };

        let Some(span) = locate_revert_span(&line, pending.inserted.start, &pending.original_url)
        else {
            debug!("revert target stale or edited; leaving the document untouched");
            return Ok(RevertOutcome::Stale);
        };

        self.editor
            .replace(
                LineSpan::new(line_no, span.start, span.end),
                &pending.original_url,
            )
            .await?;
        self.editor
            .collapse_to(Position::new(
                line_no,
                span.start + pending.original_url.len(),
            ))
            .await?;

        self.session.clear_revert();
        Ok(RevertOutcome::Reverted)
    }
}
