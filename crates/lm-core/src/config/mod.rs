//! Application configuration domain model.

use serde::{Deserialize, Serialize};

/// Linkmark configuration.
///
/// Loadable from TOML; every field has a default so an empty file (or no file
/// at all) yields a working setup for the stock `miuc` tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkmarkConfig {
    /// Title resolver settings
    pub resolver: ResolverConfig,

    /// Python environment settings
    pub python: PythonConfig,
}

/// Title resolver subprocess configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Executable name used for bare invocation (no interpreter available)
    pub tool: String,

    /// Module name for `<python> -m <module> <url>` invocation
    pub module: String,

    /// Upper bound on a single resolution, in seconds
    pub timeout_secs: u64,
}

/// Python bootstrap configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PythonConfig {
    /// pip package the resolver tool ships as
    pub package: String,

    /// Explicit interpreter path, taking precedence over discovery
    pub interpreter_override: Option<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            tool: "miuc".to_string(),
            module: "miuc".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for PythonConfig {
    fn default() -> Self {
        Self {
            package: "miuc".to_string(),
            interpreter_override: None,
        }
    }
}

impl LinkmarkConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
