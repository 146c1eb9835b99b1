use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait TimeService: Send + Sync {
    async fn sleep(&self, duration: Duration);

    /// Wall-clock milliseconds since the Unix epoch, used for notification ids
    fn now_millis(&self) -> u64;
}
