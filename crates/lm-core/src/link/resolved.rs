use serde::{Deserialize, Serialize};

/// Title used when the external resolver could not produce one.
pub const FALLBACK_TITLE: &str = "unknown";

/// Output of a title resolution, ready to be inserted into the document.
///
/// A `ResolvedLink` always exists after a resolution attempt: on any resolver
/// failure the caller receives the fallback form `[unknown](<url>)` instead of
/// an error, so the editing session is never interrupted by a backend failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLink {
    /// The markdown text to insert, normally `[title](url)`.
    pub markdown: String,

    /// The URL the link was resolved from. `None` when the inserted text was
    /// not produced from a URL (plain clipboard text takes a different path,
    /// so in practice this is `Some` for every resolver-produced link).
    pub source_url: Option<String>,
}

impl ResolvedLink {
    /// Build a link from the resolver tool's stdout.
    ///
    /// The output is trimmed of surrounding whitespace and used verbatim.
    pub fn from_output(url: &str, stdout: &str) -> Self {
        Self {
            markdown: stdout.trim().to_string(),
            source_url: Some(url.to_string()),
        }
    }

    /// Build the fallback link for a URL whose title could not be resolved.
    pub fn fallback(url: &str) -> Self {
        Self {
            markdown: format!("[{FALLBACK_TITLE}]({url})"),
            source_url: Some(url.to_string()),
        }
    }

    /// True when the title portion is literally the fallback marker.
    pub fn is_fallback(&self) -> bool {
        self.title() == Some(FALLBACK_TITLE)
    }

    /// The title portion of the markdown, when it has the `[title](...)` shape.
    pub fn title(&self) -> Option<&str> {
        let (start, end) = self.title_span()?;
        self.markdown.get(start..end)
    }

    /// Byte offsets of the title portion within `markdown`: the text between
    /// the first `[` and the last `]`.
    ///
    /// Returns `None` when the markdown does not contain such a pair, e.g.
    /// when the resolver printed something that is not a markdown link.
    pub fn title_span(&self) -> Option<(usize, usize)> {
        let open = self.markdown.find('[')?;
        let close = self.markdown.rfind(']')?;
        if close <= open {
            return None;
        }
        Some((open + 1, close))
    }
}
