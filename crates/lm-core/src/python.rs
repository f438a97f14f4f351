//! Cached Python environment state for the resolver tool.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolved interpreter and dependency state, cached once per session.
///
/// Created by the bootstrap use case on first resolution and reused for the
/// remainder of the session; only a process restart invalidates it. An absent
/// interpreter means degraded mode: the resolver tool is invoked bare through
/// the OS path lookup instead of `<python> -m <module>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpreterState {
    /// Path to the Python executable, when one was discovered.
    pub interpreter: Option<PathBuf>,

    /// Whether the resolver's package was installed at bootstrap time.
    ///
    /// A launched install is fire-and-forget, so this flag stays `false`
    /// until the next session even if the install succeeds.
    pub package_installed: bool,
}

impl InterpreterState {
    pub fn new(interpreter: PathBuf, package_installed: bool) -> Self {
        Self {
            interpreter: Some(interpreter),
            package_installed,
        }
    }

    /// State for a session with no usable interpreter.
    pub fn degraded() -> Self {
        Self {
            interpreter: None,
            package_installed: false,
        }
    }
}
