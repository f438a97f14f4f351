//! Shared mock ports for use case tests.

use async_trait::async_trait;
use mockall::mock;
use std::path::{Path, PathBuf};

use lm_core::document::{LineSpan, Position};
use lm_core::link::ResolvedLink;
use lm_core::ports::{
    ClipboardError, ClipboardPort, EditorError, EditorPort, EnvironmentError,
    PythonEnvironmentPort, TitleResolverPort, UiPort,
};
use lm_core::python::InterpreterState;

mock! {
    pub Clipboard {}

    #[async_trait]
    impl ClipboardPort for Clipboard {
        async fn read_text(&self) -> Result<String, ClipboardError>;
    }
}

mock! {
    pub Editor {}

    #[async_trait]
    impl EditorPort for Editor {
        async fn cursor(&self) -> Result<Position, EditorError>;
        async fn line_text(&self, line: u32) -> Result<String, EditorError>;
        async fn insert_at_cursor(&self, text: &str) -> Result<LineSpan, EditorError>;
        async fn select(&self, span: LineSpan) -> Result<(), EditorError>;
        async fn collapse_to(&self, pos: Position) -> Result<(), EditorError>;
        async fn replace(&self, span: LineSpan, text: &str) -> Result<(), EditorError>;
    }
}

mock! {
    pub Resolver {}

    #[async_trait]
    impl TitleResolverPort for Resolver {
        async fn resolve(&self, url: &str, interpreter: &InterpreterState) -> ResolvedLink;
    }
}

mock! {
    pub Environment {}

    #[async_trait]
    impl PythonEnvironmentPort for Environment {
        async fn discover_interpreter(&self) -> Option<PathBuf>;
        async fn is_package_installed(
            &self,
            interpreter: &Path,
            package: &str,
        ) -> Result<bool, EnvironmentError>;
        async fn launch_install(
            &self,
            interpreter: &Path,
            package: &str,
        ) -> Result<(), EnvironmentError>;
    }
}

mock! {
    pub Ui {}

    #[async_trait]
    impl UiPort for Ui {
        async fn confirm(&self, message: &str) -> anyhow::Result<bool>;
    }
}
