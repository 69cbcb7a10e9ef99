//! SendWeeklyBriefHandler - Composes the brief once and emails every recipient.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;

use super::dispatch::bounded;
use super::BriefSnapshotLoader;
use crate::config::DeliveryConfig;
use crate::domain::delivery::{DeliveryError, DeliveryResult, EmailMessage, WeeklyBriefComposer};
use crate::ports::EmailSender;

/// Command to send the weekly brief.
///
/// An omitted list and an explicit empty list both mean the configured
/// default recipients; a request never resolves to zero recipients.
#[derive(Debug, Clone, Default)]
pub struct SendWeeklyBriefCommand {
    pub recipients: Vec<String>,
}

pub struct SendWeeklyBriefHandler {
    snapshots: BriefSnapshotLoader,
    composer: WeeklyBriefComposer,
    sender: Arc<dyn EmailSender>,
    default_recipients: Vec<String>,
    dispatch_timeout: Duration,
}

impl SendWeeklyBriefHandler {
    pub fn new(
        snapshots: BriefSnapshotLoader,
        sender: Arc<dyn EmailSender>,
        config: &DeliveryConfig,
    ) -> Self {
        Self {
            snapshots,
            composer: WeeklyBriefComposer::new(config.app_url.clone()),
            sender,
            default_recipients: config.default_recipients_list(),
            dispatch_timeout: config.dispatch_timeout(),
        }
    }

    /// Overrides the per-recipient dispatch bound.
    pub fn with_dispatch_timeout(mut self, limit: Duration) -> Self {
        self.dispatch_timeout = limit;
        self
    }

    pub async fn handle(&self, cmd: SendWeeklyBriefCommand) -> Result<DeliveryResult, DeliveryError> {
        // 1. Resolve and validate recipients
        let recipients = self.resolve_recipients(cmd.recipients)?;

        // 2. Compose once
        let snapshot = self.snapshots.load().await?;
        let brief = self.composer.compose(&snapshot);

        // 3. Fan out, each dispatch bounded independently
        let dispatches = recipients.into_iter().map(|to| {
            let message = EmailMessage {
                to: to.clone(),
                subject: brief.subject.clone(),
                html: brief.html.clone(),
                text: brief.text.clone(),
            };
            let sender = Arc::clone(&self.sender);
            async move {
                bounded(Some(to), self.dispatch_timeout, async move {
                    sender.send(&message).await
                })
                .await
            }
        });
        let result = DeliveryResult::aggregate(join_all(dispatches).await);

        if result.success {
            tracing::info!(sent = ?result.sent, subject = %brief.subject, "weekly brief delivered");
        } else {
            let failed = result
                .results
                .as_ref()
                .map_or(0, |rs| rs.iter().filter(|r| !r.success).count());
            tracing::warn!(sent = ?result.sent, failed, "weekly brief partially delivered");
        }
        Ok(result)
    }

    fn resolve_recipients(&self, requested: Vec<String>) -> Result<Vec<String>, DeliveryError> {
        let recipients: Vec<String> = requested
            .into_iter()
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .collect();
        let recipients = if recipients.is_empty() {
            self.default_recipients.clone()
        } else {
            recipients
        };

        if let Some(bad) = recipients.iter().find(|r| !r.contains('@')) {
            return Err(DeliveryError::validation(
                "recipients",
                format!("Invalid recipient: {}", bad),
            ));
        }
        Ok(recipients)
    }
}
