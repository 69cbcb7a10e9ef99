//! Slack notifier that logs instead of calling the webhook.

use async_trait::async_trait;
use uuid::Uuid;

use crate::config::SlackConfig;
use crate::domain::delivery::{DeliveryReceipt, SlackMessage};
use crate::domain::foundation::Timestamp;
use crate::ports::{SlackNotifier, TransportError};

/// Log line preview length for message text.
const PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone)]
pub struct LoggingSlackNotifier {
    webhook_configured: bool,
}

impl LoggingSlackNotifier {
    pub fn new(config: &SlackConfig) -> Self {
        Self {
            webhook_configured: config.is_configured(),
        }
    }
}

#[async_trait]
impl SlackNotifier for LoggingSlackNotifier {
    async fn post(&self, message: &SlackMessage) -> Result<DeliveryReceipt, TransportError> {
        let receipt = DeliveryReceipt {
            message_id: format!("slack_{}", Uuid::new_v4().simple()),
            sent_at: Timestamp::now(),
        };
        let preview: String = message.text.chars().take(PREVIEW_CHARS).collect();
        tracing::info!(
            channel = %message.channel,
            text = %preview,
            blocks = message.blocks.len(),
            webhook_configured = self.webhook_configured,
            message_id = %receipt.message_id,
            "slack message accepted (stub transport)"
        );
        Ok(receipt)
    }
}
