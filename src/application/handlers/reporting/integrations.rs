//! Integration list and status update handlers.

use std::sync::Arc;

use crate::domain::foundation::{IntegrationId, Timestamp};
use crate::domain::reporting::{Integration, IntegrationPatch, ReportingError};
use crate::ports::EntityStore;

pub struct ListIntegrationsHandler {
    store: Arc<dyn EntityStore<Integration>>,
}

impl ListIntegrationsHandler {
    pub fn new(store: Arc<dyn EntityStore<Integration>>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<Integration>, ReportingError> {
        Ok(self.store.list().await?)
    }
}

/// Command to change an integration's connection status.
#[derive(Debug, Clone)]
pub struct UpdateIntegrationCommand {
    pub integration_id: IntegrationId,
    pub patch: IntegrationPatch,
}

pub struct UpdateIntegrationHandler {
    store: Arc<dyn EntityStore<Integration>>,
}

impl UpdateIntegrationHandler {
    pub fn new(store: Arc<dyn EntityStore<Integration>>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: UpdateIntegrationCommand) -> Result<Integration, ReportingError> {
        let mut integration = self
            .store
            .get(cmd.integration_id.as_str())
            .await?
            .ok_or_else(|| ReportingError::not_found("Integration", cmd.integration_id.as_str()))?;

        integration.apply(cmd.patch, Timestamp::now());
        self.store.upsert(integration.clone()).await?;

        tracing::info!(
            integration_id = %integration.id,
            status = ?integration.status,
            "integration status updated"
        );
        Ok(integration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixtures::SeedData;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::reporting::IntegrationStatus;

    fn store() -> Arc<InMemoryStore<Integration>> {
        Arc::new(InMemoryStore::with_entities(SeedData::load().unwrap().integrations))
    }

    fn command(id: &str, status: IntegrationStatus) -> UpdateIntegrationCommand {
        UpdateIntegrationCommand {
            integration_id: IntegrationId::new(id).unwrap(),
            patch: IntegrationPatch { status },
        }
    }

    #[tokio::test]
    async fn connecting_stamps_last_sync() {
        let store = store();
        let handler = UpdateIntegrationHandler::new(store.clone());

        let updated = handler
            .handle(command("int_hubspot", IntegrationStatus::Connected))
            .await
            .unwrap();

        assert_eq!(updated.status, IntegrationStatus::Connected);
        assert!(updated.last_sync.is_some());
        assert_eq!(store.get("int_hubspot").await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn disconnecting_clears_last_sync() {
        let handler = UpdateIntegrationHandler::new(store());
        let updated = handler
            .handle(command("int_slack", IntegrationStatus::Disconnected))
            .await
            .unwrap();
        assert_eq!(updated.last_sync, None);
    }

    #[tokio::test]
    async fn unknown_integration_is_not_found() {
        let handler = UpdateIntegrationHandler::new(store());
        let err = handler
            .handle(command("int_missing", IntegrationStatus::Connected))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Integration not found");
    }

    #[tokio::test]
    async fn list_keeps_seed_order() {
        let handler = ListIntegrationsHandler::new(store());
        let names: Vec<_> = handler.handle().await.unwrap().into_iter().map(|i| i.name).collect();
        assert_eq!(names.first().map(String::as_str), Some("Slack"));
        assert_eq!(names.len(), 6);
    }
}
