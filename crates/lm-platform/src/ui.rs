//! UI adapter for hosts without an interactive prompt.

use anyhow::Result;
use async_trait::async_trait;
use log::info;

use lm_core::ports::UiPort;

/// Answers every confirmation with a fixed value.
///
/// Headless hosts have nobody to ask; wire `StaticConfirm::decline()` to keep
/// the bootstrap from ever launching an install behind the user's back.
pub struct StaticConfirm {
    answer: bool,
}

impl StaticConfirm {
    pub fn accept() -> Self {
        Self { answer: true }
    }

    pub fn decline() -> Self {
        Self { answer: false }
    }
}

#[async_trait]
impl UiPort for StaticConfirm {
    async fn confirm(&self, message: &str) -> Result<bool> {
        info!("auto-answering '{message}' with {}", self.answer);
        Ok(self.answer)
    }
}
