//! Slack transport port.

use async_trait::async_trait;

use super::TransportError;
use crate::domain::delivery::{DeliveryReceipt, SlackMessage};

/// Port for posting a composed Slack message to a channel.
#[async_trait]
pub trait SlackNotifier: Send + Sync {
    async fn post(&self, message: &SlackMessage) -> Result<DeliveryReceipt, TransportError>;
}
