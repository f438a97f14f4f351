//! Editor port - abstracts the host editor's buffer and selection primitives.

use async_trait::async_trait;
use thiserror::Error;

use crate::document::{LineSpan, Position};

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("no active editor")]
    NoActiveEditor,

    #[error("line {0} out of bounds")]
    LineOutOfBounds(u32),

    #[error("invalid span: {0}")]
    InvalidSpan(String),
}

/// The host editor capability consumed by the commands.
///
/// Every mutation is a single atomic edit with respect to other editor
/// commands; the host serializes command invocations. Columns follow the
/// [`Position`] convention (byte offsets into UTF-8 line text).
#[async_trait]
pub trait EditorPort: Send + Sync {
    /// Current caret position (the active end of the selection, if any).
    async fn cursor(&self) -> Result<Position, EditorError>;

    /// Full text of the given line.
    async fn line_text(&self, line: u32) -> Result<String, EditorError>;

    /// Insert `text` at the caret, returning the span the text landed in.
    ///
    /// For multi-line insertions the returned span covers the final inserted
    /// segment on the line the caret ends on.
    async fn insert_at_cursor(&self, text: &str) -> Result<LineSpan, EditorError>;

    /// Make `span` the active selection.
    async fn select(&self, span: LineSpan) -> Result<(), EditorError>;

    /// Collapse any selection to a caret at `pos`.
    async fn collapse_to(&self, pos: Position) -> Result<(), EditorError>;

    /// Replace `span` with `text`.
    async fn replace(&self, span: LineSpan, text: &str) -> Result<(), EditorError>;
}
