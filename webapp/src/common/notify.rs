use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use tracing::info;

use site::contact::{ContactMessage, Notifier};

// stand-in for a real mail channel: waits a moment, logs, and reports success
pub struct SimulatedNotifier {
    pub delay_ms: u32,
}

#[async_trait(?Send)]
impl Notifier for SimulatedNotifier {
    async fn notify(&self, message: &ContactMessage) -> anyhow::Result<()> {
        TimeoutFuture::new(self.delay_ms).await;

        info!(
            {recipient = %message.recipient, patient = %message.fields.name},
            "simulated contact notification sent"
        );
        Ok(())
    }
}
