//! Pure line-scanning helpers behind the tab-navigate and escape-revert
//! commands.
//!
//! Both functions operate on a single line of text with byte-offset columns
//! and perform no I/O; the use cases feed them the current line and cursor and
//! apply the result through the editor port.

/// The full extent of a `[title](url)` link located for reverting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertSpan {
    /// Byte offset of the opening `[`.
    pub start: usize,
    /// Byte offset one past the closing `)`.
    pub end: usize,
}

/// Find the exit point of a markdown link: the first `)` at a byte offset of
/// at least `col + 1`, returning the offset one past it.
///
/// Returns `None` when the rest of the line contains no `)`, in which case
/// the caller leaves the cursor untouched.
pub fn find_link_exit(line: &str, col: usize) -> Option<usize> {
    let from = col.saturating_add(1);
    line.char_indices()
        .find(|&(idx, ch)| idx >= from && ch == ')')
        .map(|(idx, _)| idx + 1)
}

/// Locate the `[title](url)` span eligible for reverting to `original_url`.
///
/// Scans for the first `)` at or after `col`, then validates the surrounding
/// text instead of trusting recorded offsets:
///
/// - the text immediately before the `)` must equal `original_url` exactly,
/// - the URL must be preceded by `](`,
/// - a matching `[` must exist earlier on the line.
///
/// Any mismatch yields `None`. The user may have edited the link after
/// insertion, and reverting by stale offsets would corrupt unrelated text, so
/// the content is re-validated before any mutation.
pub fn locate_revert_span(line: &str, col: usize, original_url: &str) -> Option<RevertSpan> {
    if original_url.is_empty() {
        return None;
    }

    let close = line
        .char_indices()
        .find(|&(idx, ch)| idx >= col && ch == ')')
        .map(|(idx, _)| idx)?;

    // `str::get` rejects offsets that fall inside a multibyte character, so
    // arbitrary edited content cannot trip a slicing panic here.
    let url_start = close.checked_sub(original_url.len())?;
    if line.get(url_start..close) != Some(original_url) {
        return None;
    }

    let delim = url_start.checked_sub(2)?;
    if line.get(delim..url_start) != Some("](") {
        return None;
    }

    let open = line[..delim].rfind('[')?;
    Some(RevertSpan {
        start: open,
        end: close + 1,
    })
}
