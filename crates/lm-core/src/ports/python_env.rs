//! Python environment port - interpreter discovery and package management.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Access to the Python toolchain backing the resolver tool.
#[async_trait]
pub trait PythonEnvironmentPort: Send + Sync {
    /// Discover a usable interpreter for the current workspace.
    ///
    /// `None` means the session runs in degraded mode and the resolver falls
    /// back to a bare tool invocation via the OS path.
    async fn discover_interpreter(&self) -> Option<PathBuf>;

    /// Whether `package` is installed for the given interpreter
    /// (`<interpreter> -m pip show <package>`, exit 0 means installed).
    async fn is_package_installed(
        &self,
        interpreter: &Path,
        package: &str,
    ) -> Result<bool, EnvironmentError>;

    /// Launch `<interpreter> -m pip install <package>` and return once the
    /// process has been spawned. Fire-and-forget: completion is not awaited
    /// and success is not verified.
    async fn launch_install(
        &self,
        interpreter: &Path,
        package: &str,
    ) -> Result<(), EnvironmentError>;
}
