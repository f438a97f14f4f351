//! External title resolver subprocess adapter.

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use log::{debug, warn};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

use lm_core::config::ResolverConfig;
use lm_core::link::ResolvedLink;
use lm_core::ports::TitleResolverPort;
use lm_core::python::InterpreterState;

/// Runs the resolver tool as a subprocess: `<python> -m <module> <url>` when
/// an interpreter is available, `<tool> <url>` otherwise.
///
/// The URL travels as a single argv element, never through a shell, so
/// characters that are significant to a command shell need no quoting. Each
/// call spawns exactly one process, waits at most `timeout_secs`, and absorbs
/// every failure into the fallback link. The child is killed when the wait is
/// abandoned, so a hung tool cannot outlive its resolution.
pub struct ProcessTitleResolver {
    config: ResolverConfig,
}

impl ProcessTitleResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    async fn run_tool(&self, url: &str, interpreter: &InterpreterState) -> Result<String> {
        let mut command = match &interpreter.interpreter {
            Some(python) => {
                let mut command = Command::new(python);
                command.arg("-m").arg(&self.config.module);
                command
            }
            None => Command::new(&self.config.tool),
        };
        command
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let wait = Duration::from_secs(self.config.timeout_secs);
        let output = timeout(wait, command.output())
            .await
            .map_err(|_| anyhow!("timed out after {}s", self.config.timeout_secs))??;

        if !output.status.success() {
            bail!("tool exited with {}", output.status);
        }

        let stdout = std::str::from_utf8(&output.stdout)?;
        let trimmed = stdout.trim();
        if trimmed.is_empty() {
            bail!("tool produced no output");
        }
        Ok(trimmed.to_string())
    }
}

#[async_trait]
impl TitleResolverPort for ProcessTitleResolver {
    async fn resolve(&self, url: &str, interpreter: &InterpreterState) -> ResolvedLink {
        match self.run_tool(url, interpreter).await {
            Ok(markdown) => {
                debug!("resolver output for {url}: {markdown}");
                ResolvedLink::from_output(url, &markdown)
            }
            Err(err) => {
                warn!("title resolution failed for {url}: {err}");
                ResolvedLink::fallback(url)
            }
        }
    }
}
