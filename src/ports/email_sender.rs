//! Email transport port.

use async_trait::async_trait;

use super::TransportError;
use crate::domain::delivery::{DeliveryReceipt, EmailMessage};

/// Port for sending a single composed email.
///
/// Bulk sends call this once per recipient; a failure here affects only that
/// recipient's result.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<DeliveryReceipt, TransportError>;
}
