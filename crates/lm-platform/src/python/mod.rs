//! Python interpreter discovery and pip management.

use async_trait::async_trait;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

use lm_core::config::PythonConfig;
use lm_core::ports::{EnvironmentError, PythonEnvironmentPort};

/// Environment variable overriding interpreter discovery.
pub const PYTHON_OVERRIDE_ENV: &str = "LINKMARK_PYTHON";

const INTERPRETER_NAMES: &[&str] = &["python3", "python"];

/// Interpreter discovery and pip subprocesses against the host system.
///
/// Discovery order: explicit config override, the `LINKMARK_PYTHON`
/// environment variable, then a `PATH` search for `python3`/`python`.
pub struct SystemPythonEnvironment {
    config: PythonConfig,
}

impl SystemPythonEnvironment {
    pub fn new(config: PythonConfig) -> Self {
        Self { config }
    }

    fn find_in_path(name: &str) -> Option<PathBuf> {
        let path_var = std::env::var_os("PATH")?;
        for dir in std::env::split_paths(&path_var) {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
            #[cfg(windows)]
            {
                let candidate = dir.join(format!("{name}.exe"));
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
        }
        None
    }

    fn spawn_error(interpreter: &Path, args: &[&str], source: std::io::Error) -> EnvironmentError {
        EnvironmentError::Spawn {
            command: format!("{} {}", interpreter.display(), args.join(" ")),
            source,
        }
    }
}

#[async_trait]
impl PythonEnvironmentPort for SystemPythonEnvironment {
    async fn discover_interpreter(&self) -> Option<PathBuf> {
        if let Some(configured) = &self.config.interpreter_override {
            debug!("using configured interpreter {configured}");
            return Some(PathBuf::from(configured));
        }
        if let Some(from_env) = std::env::var_os(PYTHON_OVERRIDE_ENV) {
            debug!("using {PYTHON_OVERRIDE_ENV} interpreter");
            return Some(PathBuf::from(from_env));
        }

        for name in INTERPRETER_NAMES {
            if let Some(found) = Self::find_in_path(name) {
                debug!("found interpreter {}", found.display());
                return Some(found);
            }
        }
        None
    }

    async fn is_package_installed(
        &self,
        interpreter: &Path,
        package: &str,
    ) -> Result<bool, EnvironmentError> {
        let args = ["-m", "pip", "show", package];
        let status = Command::new(interpreter)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| Self::spawn_error(interpreter, &args, e))?;
        Ok(status.success())
    }

    async fn launch_install(
        &self,
        interpreter: &Path,
        package: &str,
    ) -> Result<(), EnvironmentError> {
        let args = ["-m", "pip", "install", package];
        // Fire-and-forget: the child is detached and never awaited. The
        // package becomes usable on the next session at the earliest.
        let child = Command::new(interpreter)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Self::spawn_error(interpreter, &args, e))?;
        info!(
            "launched `{} -m pip install {package}` (pid {:?})",
            interpreter.display(),
            child.id()
        );
        drop(child);
        Ok(())
    }
}
