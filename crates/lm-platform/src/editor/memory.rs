//! Line-buffer editor for headless environments.
//!
//! Hosts that embed linkmark inside a real editor implement
//! [`EditorPort`] against their own buffer API; this adapter provides the
//! same contract over an in-memory line buffer so the full command flow can
//! run without a host, which is also what the integration tests drive.

use async_trait::async_trait;
use std::sync::Mutex;

use lm_core::document::{LineSpan, Position};
use lm_core::ports::{EditorError, EditorPort};

#[derive(Debug)]
struct EditorState {
    lines: Vec<String>,
    cursor: Position,
    selection: Option<LineSpan>,
}

/// In-memory [`EditorPort`] implementation.
#[derive(Debug)]
pub struct InMemoryEditor {
    state: Mutex<EditorState>,
}

impl Default for InMemoryEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEditor {
    /// Empty single-line document with the caret at the origin.
    pub fn new() -> Self {
        Self::from_text("")
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            state: Mutex::new(EditorState {
                lines: text.split('\n').map(str::to_string).collect(),
                cursor: Position::new(0, 0),
                selection: None,
            }),
        }
    }

    /// Place the caret, clearing any selection. Test/setup convenience.
    pub fn set_cursor(&self, pos: Position) {
        let mut state = self.state.lock().unwrap();
        state.cursor = pos;
        state.selection = None;
    }

    /// Full buffer content joined with newlines.
    pub fn text(&self) -> String {
        self.state.lock().unwrap().lines.join("\n")
    }

    pub fn caret(&self) -> Position {
        self.state.lock().unwrap().cursor
    }

    pub fn selection(&self) -> Option<LineSpan> {
        self.state.lock().unwrap().selection
    }

    /// The currently selected text, if any.
    pub fn selected_text(&self) -> Option<String> {
        let state = self.state.lock().unwrap();
        let span = state.selection?;
        state
            .lines
            .get(span.line as usize)
            .and_then(|line| line.get(span.start..span.end))
            .map(str::to_string)
    }
}

fn line_of<'a>(state: &'a EditorState, line: u32) -> Result<&'a String, EditorError> {
    state
        .lines
        .get(line as usize)
        .ok_or(EditorError::LineOutOfBounds(line))
}

#[async_trait]
impl EditorPort for InMemoryEditor {
    async fn cursor(&self) -> Result<Position, EditorError> {
        Ok(self.state.lock().unwrap().cursor)
    }

    async fn line_text(&self, line: u32) -> Result<String, EditorError> {
        let state = self.state.lock().unwrap();
        line_of(&state, line).cloned()
    }

    async fn insert_at_cursor(&self, text: &str) -> Result<LineSpan, EditorError> {
        let mut state = self.state.lock().unwrap();
        let pos = state.cursor;
        let line_idx = pos.line as usize;
        let current = line_of(&state, pos.line)?.clone();
        let col = pos.col.min(current.len());
        if !current.is_char_boundary(col) {
            return Err(EditorError::InvalidSpan(format!(
                "column {col} is not a character boundary"
            )));
        }

        let span = if let Some((first, rest)) = text.split_once('\n') {
            // Multi-line insert: split the current line at the caret and
            // thread the remaining segments in as new lines.
            let (head, tail) = current.split_at(col);
            let mut segments: Vec<&str> = rest.split('\n').collect();
            let last = segments.pop().unwrap_or("");

            state.lines[line_idx] = format!("{head}{first}");
            let mut insert_at = line_idx + 1;
            for segment in segments {
                state.lines.insert(insert_at, segment.to_string());
                insert_at += 1;
            }
            state.lines.insert(insert_at, format!("{last}{tail}"));
            LineSpan::new(insert_at as u32, 0, last.len())
        } else {
            let mut updated = current;
            updated.insert_str(col, text);
            state.lines[line_idx] = updated;
            LineSpan::new(pos.line, col, col + text.len())
        };

        state.cursor = span.end_position();
        state.selection = None;
        Ok(span)
    }

    async fn select(&self, span: LineSpan) -> Result<(), EditorError> {
        let mut state = self.state.lock().unwrap();
        let line = line_of(&state, span.line)?;
        if span.end > line.len() || span.start > span.end {
            return Err(EditorError::InvalidSpan(format!(
                "{}..{} outside line of length {}",
                span.start,
                span.end,
                line.len()
            )));
        }
        state.selection = Some(span);
        state.cursor = span.end_position();
        Ok(())
    }

    async fn collapse_to(&self, pos: Position) -> Result<(), EditorError> {
        let mut state = self.state.lock().unwrap();
        let line = line_of(&state, pos.line)?;
        let col = pos.col.min(line.len());
        state.selection = None;
        state.cursor = Position::new(pos.line, col);
        Ok(())
    }

    async fn replace(&self, span: LineSpan, text: &str) -> Result<(), EditorError> {
        let mut state = self.state.lock().unwrap();
        let line = line_of(&state, span.line)?.clone();
        if span.end > line.len()
            || span.start > span.end
            || !line.is_char_boundary(span.start)
            || !line.is_char_boundary(span.end)
        {
            return Err(EditorError::InvalidSpan(format!(
                "{}..{} outside line of length {}",
                span.start,
                span.end,
                line.len()
            )));
        }
        let mut updated = line;
        updated.replace_range(span.start..span.end, text);
        state.lines[span.line as usize] = updated;
        state.selection = None;
        Ok(())
    }
}
