//! Title resolver port - abstracts the external URL-to-title tool.

use async_trait::async_trait;

use crate::link::ResolvedLink;
use crate::python::InterpreterState;

/// Converts a URL into a markdown link via the external resolver tool.
///
/// Infallible by contract: any subprocess failure (launch error, non-zero
/// exit, timeout, undecodable output) is absorbed into the fallback
/// `[unknown](<url>)` link so a backend failure never interrupts editing.
/// One attempt per call, no retries.
#[async_trait]
pub trait TitleResolverPort: Send + Sync {
    async fn resolve(&self, url: &str, interpreter: &InterpreterState) -> ResolvedLink;
}
