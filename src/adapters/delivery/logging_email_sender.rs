//! Email sender that logs instead of calling a provider.

use async_trait::async_trait;
use uuid::Uuid;

use crate::config::{EmailConfig, EmailProvider};
use crate::domain::delivery::{DeliveryReceipt, EmailMessage};
use crate::domain::foundation::Timestamp;
use crate::ports::{EmailSender, TransportError};

/// Accepts every well-formed message and returns a synthetic receipt.
#[derive(Debug, Clone)]
pub struct LoggingEmailSender {
    from: String,
    provider: EmailProvider,
}

impl LoggingEmailSender {
    pub fn new(config: &EmailConfig) -> Self {
        Self {
            from: config.from_header(),
            provider: config.provider,
        }
    }
}

#[async_trait]
impl EmailSender for LoggingEmailSender {
    async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, TransportError> {
        if !message.to.contains('@') {
            return Err(TransportError::Rejected(message.to.clone()));
        }

        let receipt = DeliveryReceipt {
            message_id: format!("email_{}", Uuid::new_v4().simple()),
            sent_at: Timestamp::now(),
        };
        tracing::info!(
            provider = %self.provider,
            from = %self.from,
            to = %message.to,
            subject = %message.subject,
            message_id = %receipt.message_id,
            "email accepted (stub transport)"
        );
        Ok(receipt)
    }
}
