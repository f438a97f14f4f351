use anyhow::Result;

#[async_trait::async_trait]
pub trait UiPort: Send + Sync {
    /// Ask the user a yes/no question, e.g. whether to install the resolver
    /// package. Suspends until the user answers or dismisses the prompt.
    async fn confirm(&self, message: &str) -> Result<bool>;
}
