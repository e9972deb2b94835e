use std::time::Duration;

/// Waits out the artificial delays of the chat flow.
pub trait ReplyScheduler: Send + Sync {
    async fn wait(&self, delay: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl ReplyScheduler for TokioScheduler {
    async fn wait(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Skips every delay. Used by one-shot commands and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateScheduler;

impl ReplyScheduler for ImmediateScheduler {
    async fn wait(&self, _delay: Duration) {}
}
