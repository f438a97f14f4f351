use anyhow::Result;
use log::debug;
use std::sync::Arc;

use lm_core::document::LineSpan;
use lm_core::link::{is_web_url, ResolvedLink};
use lm_core::ports::{ClipboardPort, EditorPort, TitleResolverPort};
use lm_core::revert::PendingRevert;

use crate::session::Session;
use crate::usecases::bootstrap_python::BootstrapPythonUseCase;

/// What a paste invocation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteOutcome {
    /// Clipboard held a URL; a markdown link was inserted and the revert
    /// slot was armed.
    LinkInserted,
    /// Clipboard held plain text; it was inserted verbatim and any pending
    /// revert was cleared.
    PlainText,
    /// Another paste was still resolving; nothing was done.
    Busy,
}

/// The paste-and-resolve command.
///
/// Reads the clipboard, classifies it, resolves URLs into markdown links
/// through the external tool, performs the single document insertion plus
/// selection update, and records the revertible substitution.
pub struct PasteLinkUseCase {
    clipboard: Arc<dyn ClipboardPort>,
    editor: Arc<dyn EditorPort>,
    resolver: Arc<dyn TitleResolverPort>,
    bootstrap: Arc<BootstrapPythonUseCase>,
    session: Arc<Session>,
}

impl PasteLinkUseCase {
    pub fn new(
        clipboard: Arc<dyn ClipboardPort>,
        editor: Arc<dyn EditorPort>,
        resolver: Arc<dyn TitleResolverPort>,
        bootstrap: Arc<BootstrapPythonUseCase>,
        session: Arc<Session>,
    ) -> Self {
        Self {
            clipboard,
            editor,
            resolver,
            bootstrap,
            session,
        }
    }

    pub async fn execute(&self) -> Result<PasteOutcome> {
        // Single-slot in-flight guard: a second invocation while one is
        // resolving would race it for the revert slot, so it is rejected.
        let Some(_guard) = self.session.begin_paste() else {
            debug!("paste rejected: a resolution is already in flight");
            return Ok(PasteOutcome::Busy);
        };

        let text = self.clipboard.read_text().await?;

        if !is_web_url(&text) {
            self.editor.insert_at_cursor(&text).await?;
            self.session.clear_revert();
            return Ok(PasteOutcome::PlainText);
        }

        let interpreter = self.bootstrap.execute().await;
        let link = self.resolver.resolve(&text, &interpreter).await;
        debug!("resolved '{text}' into '{}'", link.markdown);

        let span = self.editor.insert_at_cursor(&link.markdown).await?;
        self.editor.select(selection_for(&link, span)).await?;

        match link.source_url {
            Some(original_url) => self.session.arm_revert(PendingRevert {
                original_url,
                inserted: span,
            }),
            None => self.session.clear_revert(),
        }

        Ok(PasteOutcome::LinkInserted)
    }
}

/// Post-insert selection: the title portion, so the user can retype it
/// immediately. A fallback link selects the whole insertion instead, making
/// the `[unknown]` sentinel impossible to miss.
fn selection_for(link: &ResolvedLink, span: LineSpan) -> LineSpan {
    if link.is_fallback() {
        return span;
    }
    match link.title_span() {
        Some((start, end)) => LineSpan::new(span.line, span.start + start, span.start + end),
        None => span,
    }
}
