//! Scripted ports shared by the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lm_core::link::ResolvedLink;
use lm_core::ports::{
    ClipboardError, ClipboardPort, EnvironmentError, PythonEnvironmentPort, TitleResolverPort,
};
use lm_core::python::InterpreterState;
use lm_core::LinkmarkConfig;
use lm_platform::{InMemoryEditor, StaticConfirm};
use linkmark::{Linkmark, LinkmarkDeps};

/// Clipboard that always returns the same payload.
pub struct FixedClipboard(pub String);

#[async_trait]
impl ClipboardPort for FixedClipboard {
    async fn read_text(&self) -> Result<String, ClipboardError> {
        Ok(self.0.clone())
    }
}

/// Resolver that returns a canned output (or the fallback) and counts calls.
pub struct ScriptedResolver {
    output: Option<String>,
    calls: AtomicUsize,
}

impl ScriptedResolver {
    pub fn returning(output: &str) -> Self {
        Self {
            output: Some(output.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            output: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TitleResolverPort for ScriptedResolver {
    async fn resolve(&self, url: &str, _interpreter: &InterpreterState) -> ResolvedLink {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.output {
            Some(output) => ResolvedLink::from_output(url, output),
            None => ResolvedLink::fallback(url),
        }
    }
}

/// Environment with no interpreter: the session runs degraded.
pub struct NoPython;

#[async_trait]
impl PythonEnvironmentPort for NoPython {
    async fn discover_interpreter(&self) -> Option<PathBuf> {
        None
    }

    async fn is_package_installed(
        &self,
        _interpreter: &Path,
        _package: &str,
    ) -> Result<bool, EnvironmentError> {
        Ok(false)
    }

    async fn launch_install(
        &self,
        _interpreter: &Path,
        _package: &str,
    ) -> Result<(), EnvironmentError> {
        Ok(())
    }
}

/// Assemble a full command surface over an in-memory editor.
pub fn linkmark_with(
    clipboard_text: &str,
    resolver: Arc<ScriptedResolver>,
    editor: Arc<InMemoryEditor>,
) -> Linkmark {
    Linkmark::new(LinkmarkDeps {
        clipboard: Arc::new(FixedClipboard(clipboard_text.to_string())),
        editor,
        resolver,
        environment: Arc::new(NoPython),
        ui: Arc::new(StaticConfirm::decline()),
        config: LinkmarkConfig::default(),
    })
}
