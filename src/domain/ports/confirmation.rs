use async_trait::async_trait;

/// Gate in front of destructive actions; the user must say yes.
#[async_trait]
pub trait ConfirmationPort: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Fixed answer, for headless runs and tests
#[derive(Debug, Clone, Copy)]
pub struct StaticConfirmation(pub bool);

#[async_trait]
impl ConfirmationPort for StaticConfirmation {
    async fn confirm(&self, prompt: &str) -> bool {
        tracing::debug!("Confirmation requested ({}): answering {}", prompt, self.0);
        self.0
    }
}
