use async_trait::async_trait;

/// Yes/no prompt shown before destructive actions.
#[async_trait]
pub trait Confirmer: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}
