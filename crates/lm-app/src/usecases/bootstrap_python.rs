use log::{info, warn};
use std::sync::Arc;

use lm_core::ports::{PythonEnvironmentPort, UiPort};
use lm_core::python::InterpreterState;

use crate::session::Session;

/// One-time-per-session Python bootstrap.
///
/// Resolves an interpreter, checks whether the resolver package is installed,
/// and offers to install it. The result is cached in the [`Session`];
/// subsequent calls return the cache without touching the environment again.
///
/// Nothing here is fatal: a missing interpreter or a declined install leaves
/// the session in degraded mode, where resolution is attempted bare and
/// failures surface as fallback links.
pub struct BootstrapPythonUseCase {
    env: Arc<dyn PythonEnvironmentPort>,
    ui: Arc<dyn UiPort>,
    session: Arc<Session>,
    package: String,
}

impl BootstrapPythonUseCase {
    pub fn new(
        env: Arc<dyn PythonEnvironmentPort>,
        ui: Arc<dyn UiPort>,
        session: Arc<Session>,
        package: String,
    ) -> Self {
        Self {
            env,
            ui,
            session,
            package,
        }
    }

    pub async fn execute(&self) -> InterpreterState {
        if let Some(state) = self.session.interpreter_state() {
            return state;
        }

        let state = self.probe().await;
        self.session.cache_interpreter(state.clone());
        state
    }

    async fn probe(&self) -> InterpreterState {
        let Some(interpreter) = self.env.discover_interpreter().await else {
            info!("no python interpreter found; resolver runs in degraded mode");
            return InterpreterState::degraded();
        };

        let installed = match self
            .env
            .is_package_installed(&interpreter, &self.package)
            .await
        {
            Ok(installed) => installed,
            Err(err) => {
                warn!("package check for '{}' failed: {err}", self.package);
                false
            }
        };

        if !installed {
            self.offer_install(&interpreter).await;
        }

        InterpreterState::new(interpreter, installed)
    }

    async fn offer_install(&self, interpreter: &std::path::Path) {
        let message = format!(
            "The '{}' package is not installed for {}. Install it now?",
            self.package,
            interpreter.display()
        );
        match self.ui.confirm(&message).await {
            Ok(true) => {
                // Fire-and-forget: the install runs in the background and
                // its outcome is not verified this session.
                if let Err(err) = self.env.launch_install(interpreter, &self.package).await {
                    warn!("failed to launch '{}' install: {err}", self.package);
                }
            }
            Ok(false) => info!("user declined '{}' install", self.package),
            Err(err) => warn!("install prompt failed: {err}"),
        }
    }
}
