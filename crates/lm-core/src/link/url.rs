use lazy_static::lazy_static;
use regex::Regex;

// Compiled once; recompiling the pattern on every classification would be
// wasted work on the paste hot path.
lazy_static! {
    /// Absolute HTTP(S) URL grammar.
    ///
    /// Scheme and pattern are case-sensitive: `HTTP://` is rejected. The
    /// grammar is anchored on both ends, so partial matches inside a larger
    /// string never classify as a URL. The trailing group admits a
    /// `;`-delimited suffix segment (e.g. `;jsessionid=...`).
    static ref WEB_URL_REGEX: Regex = Regex::new(
        r"^https?://[\w\-]+(?:\.[\w\-]+)+(?:[\w\-.,@?^=%&:/~+#]*[\w\-@?^=%&/~+#])?(?:;[\w\-.,@?^=%&:/~+#]*)?$"
    ).unwrap();
}

/// Returns true when `text` is a single absolute HTTP(S) URL.
///
/// Pure predicate: no I/O, no side effects. Strings containing whitespace,
/// control characters, or lacking a `http://`/`https://` prefix are rejected,
/// as is a host without at least one dot.
pub fn is_web_url(text: &str) -> bool {
    WEB_URL_REGEX.is_match(text)
}
