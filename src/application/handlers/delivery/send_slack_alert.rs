//! SendSlackAlertHandler - Posts one anomaly as a Slack alert.

use std::sync::Arc;
use std::time::Duration;

use super::dispatch::bounded;
use crate::config::DeliveryConfig;
use crate::domain::delivery::{DeliveryError, DeliveryResult, SlackAlertComposer, SlackMessage};
use crate::domain::foundation::AnomalyId;
use crate::domain::reporting::Anomaly;
use crate::ports::{EntityStore, SlackNotifier};

#[derive(Debug, Clone)]
pub struct SendSlackAlertCommand {
    pub anomaly_id: AnomalyId,
    /// Target channel; the configured default when absent or blank.
    pub channel: Option<String>,
}

pub struct SendSlackAlertHandler {
    anomalies: Arc<dyn EntityStore<Anomaly>>,
    composer: SlackAlertComposer,
    notifier: Arc<dyn SlackNotifier>,
    default_channel: String,
    dispatch_timeout: Duration,
}

impl SendSlackAlertHandler {
    pub fn new(
        anomalies: Arc<dyn EntityStore<Anomaly>>,
        notifier: Arc<dyn SlackNotifier>,
        config: &DeliveryConfig,
    ) -> Self {
        Self {
            anomalies,
            composer: SlackAlertComposer::new(config.app_url.clone()),
            notifier,
            default_channel: config.default_slack_channel.clone(),
            dispatch_timeout: config.dispatch_timeout(),
        }
    }

    pub async fn handle(&self, cmd: SendSlackAlertCommand) -> Result<DeliveryResult, DeliveryError> {
        let anomaly = self
            .anomalies
            .get(cmd.anomaly_id.as_str())
            .await?
            .ok_or_else(|| DeliveryError::anomaly_not_found(cmd.anomaly_id.clone()))?;

        let channel = cmd
            .channel
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| self.default_channel.clone());

        let alert = self.composer.compose(&anomaly);
        let message = SlackMessage {
            channel: channel.clone(),
            text: alert.text,
            blocks: alert.blocks,
        };

        let result = bounded(
            Some(channel.clone()),
            self.dispatch_timeout,
            self.notifier.post(&message),
        )
        .await;

        if result.success {
            tracing::info!(anomaly_id = %anomaly.id, channel = %channel, "slack alert posted");
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::delivery::LoggingSlackNotifier;
    use crate::adapters::fixtures::SeedData;
    use crate::adapters::memory::InMemoryStore;
    use crate::config::SlackConfig;
    use crate::domain::delivery::DeliveryReceipt;
    use crate::ports::TransportError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNotifier {
        posted: Mutex<Vec<SlackMessage>>,
    }

    #[async_trait]
    impl SlackNotifier for RecordingNotifier {
        async fn post(&self, message: &SlackMessage) -> Result<DeliveryReceipt, TransportError> {
            self.posted.lock().unwrap().push(message.clone());
            Err(TransportError::Unavailable("webhook down".to_string()))
        }
    }

    fn anomalies() -> Arc<InMemoryStore<Anomaly>> {
        Arc::new(InMemoryStore::with_entities(SeedData::load().unwrap().anomalies))
    }

    fn command(id: &str, channel: Option<&str>) -> SendSlackAlertCommand {
        SendSlackAlertCommand {
            anomaly_id: AnomalyId::new(id).unwrap(),
            channel: channel.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn posts_to_requested_channel() {
        let handler = SendSlackAlertHandler::new(
            anomalies(),
            Arc::new(LoggingSlackNotifier::new(&SlackConfig::default())),
            &DeliveryConfig::default(),
        );

        let result = handler.handle(command("anom_001", Some("#exec"))).await.unwrap();

        assert!(result.success);
        assert_eq!(result.recipient.as_deref(), Some("#exec"));
        assert!(result.message_id.unwrap().starts_with("slack_"));
    }

    #[tokio::test]
    async fn blank_channel_uses_default_and_failure_is_reported() {
        let notifier = Arc::new(RecordingNotifier::default());
        let handler = SendSlackAlertHandler::new(anomalies(), notifier.clone(), &DeliveryConfig::default());

        let result = handler.handle(command("anom_001", Some(" "))).await.unwrap();

        assert!(!result.success);
        let posted = notifier.posted.lock().unwrap();
        assert_eq!(posted[0].channel, "#ops-alerts");
        assert_eq!(posted[0].blocks.len(), 5);
    }

    #[tokio::test]
    async fn unknown_anomaly_is_not_found() {
        let handler = SendSlackAlertHandler::new(
            anomalies(),
            Arc::new(LoggingSlackNotifier::new(&SlackConfig::default())),
            &DeliveryConfig::default(),
        );

        let err = handler.handle(command("anom_404", None)).await.unwrap_err();

        assert_eq!(err.message(), "Anomaly not found");
    }
}
