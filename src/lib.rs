//! # linkmark
//!
//! Paste web URLs as resolved markdown links.
//!
//! The clipboard payload is classified, URLs are handed to an external
//! title-resolution tool (`miuc` by default), and the resulting
//! `[title](url)` link is inserted at the cursor with the title selected for
//! immediate retyping. Exactly one substitution stays revertible: tab jumps
//! past the link, escape restores the bare URL as long as the link has not
//! been edited since.
//!
//! This crate wires the platform adapters from `lm-platform` into the use
//! cases from `lm-app` and exposes the three host commands. An embedding
//! editor supplies its own [`EditorPort`] implementation (and usually a real
//! [`UiPort`]); everything else can come from [`Linkmark::with_system_defaults`].

mod deps;

pub use deps::LinkmarkDeps;

use std::sync::Arc;

use anyhow::Result;

use lm_app::{
    BootstrapPythonUseCase, JumpPastLinkUseCase, PasteLinkUseCase, RevertLinkUseCase, Session,
};
use lm_core::ports::{EditorPort, UiPort};
pub use lm_app::{PasteOutcome, RevertOutcome};
pub use lm_core::LinkmarkConfig;
use lm_platform::{ProcessTitleResolver, SystemClipboard, SystemPythonEnvironment};

/// The assembled command surface.
pub struct Linkmark {
    paste: PasteLinkUseCase,
    jump: JumpPastLinkUseCase,
    revert: RevertLinkUseCase,
    session: Arc<Session>,
}

impl Linkmark {
    /// Assemble the commands from explicit dependencies.
    pub fn new(deps: LinkmarkDeps) -> Self {
        let session = Arc::new(Session::new());
        let bootstrap = Arc::new(BootstrapPythonUseCase::new(
            deps.environment,
            deps.ui,
            session.clone(),
            deps.config.python.package.clone(),
        ));
        Self {
            paste: PasteLinkUseCase::new(
                deps.clipboard,
                deps.editor.clone(),
                deps.resolver,
                bootstrap,
                session.clone(),
            ),
            jump: JumpPastLinkUseCase::new(deps.editor.clone()),
            revert: RevertLinkUseCase::new(deps.editor, session.clone()),
            session,
        }
    }

    /// Wire the system adapters around a host-provided editor and prompt.
    pub fn with_system_defaults(
        editor: Arc<dyn EditorPort>,
        ui: Arc<dyn UiPort>,
        config: LinkmarkConfig,
    ) -> Self {
        let deps = LinkmarkDeps {
            clipboard: Arc::new(SystemClipboard::new()),
            editor,
            resolver: Arc::new(ProcessTitleResolver::new(config.resolver.clone())),
            environment: Arc::new(SystemPythonEnvironment::new(config.python.clone())),
            ui,
            config,
        };
        Self::new(deps)
    }

    /// The paste-and-resolve command.
    pub async fn paste_link(&self) -> Result<PasteOutcome> {
        self.paste.execute().await
    }

    /// The tab-navigate command: caret one past the next `)`.
    pub async fn jump_past_link(&self) -> Result<()> {
        self.jump.execute().await
    }

    /// The escape-revert command: restore the bare original URL.
    pub async fn revert_link(&self) -> Result<RevertOutcome> {
        self.revert.execute().await
    }

    /// Session state shared by the commands.
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }
}
