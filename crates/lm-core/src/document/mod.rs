//! Editor coordinate types and line scanning.
mod scan;

pub use scan::{find_link_exit, locate_revert_span, RevertSpan};

use serde::{Deserialize, Serialize};

/// A caret position inside the document.
///
/// `col` is a byte offset into the line's UTF-8 text, not a display column.
/// All scanning functions in this crate produce and consume byte offsets, so
/// an editor adapter must translate to its own column unit at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub col: usize,
}

impl Position {
    pub fn new(line: u32, col: usize) -> Self {
        Self { line, col }
    }
}

/// A contiguous span of text on a single line, `start..end` in byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSpan {
    pub line: u32,
    pub start: usize,
    pub end: usize,
}

impl LineSpan {
    pub fn new(line: u32, start: usize, end: usize) -> Self {
        Self { line, start, end }
    }

    /// Position of the start of the span.
    pub fn start_position(&self) -> Position {
        Position::new(self.line, self.start)
    }

    /// Position one past the last byte of the span.
    pub fn end_position(&self) -> Position {
        Position::new(self.line, self.end)
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}
