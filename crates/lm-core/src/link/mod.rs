//! Markdown link domain models.
mod resolved;
mod url;

pub use resolved::{ResolvedLink, FALLBACK_TITLE};
pub use url::is_web_url;
