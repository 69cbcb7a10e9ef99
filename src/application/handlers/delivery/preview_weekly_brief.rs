//! PreviewWeeklyBriefHandler - Renders the brief without sending it.

use crate::config::DeliveryConfig;
use crate::domain::delivery::{DeliveryError, WeeklyBrief, WeeklyBriefComposer};

use super::BriefSnapshotLoader;

pub struct PreviewWeeklyBriefHandler {
    snapshots: BriefSnapshotLoader,
    composer: WeeklyBriefComposer,
}

impl PreviewWeeklyBriefHandler {
    pub fn new(snapshots: BriefSnapshotLoader, config: &DeliveryConfig) -> Self {
        Self {
            snapshots,
            composer: WeeklyBriefComposer::new(config.app_url.clone()),
        }
    }

    pub async fn handle(&self) -> Result<WeeklyBrief, DeliveryError> {
        let snapshot = self.snapshots.load().await?;
        Ok(self.composer.compose(&snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn empty_snapshot_uses_placeholder_period() {
        let loader = BriefSnapshotLoader::new(
            Arc::new(InMemoryStore::new()),
            Arc::new(InMemoryStore::new()),
            Arc::new(InMemoryStore::new()),
            Arc::new(InMemoryStore::new()),
        );
        let handler = PreviewWeeklyBriefHandler::new(loader, &DeliveryConfig::default());

        let brief = handler.handle().await.unwrap();

        assert_eq!(brief.subject, "Weekly Exec Brief - This Week");
        assert!(brief.html.contains("http://localhost:3003"));
    }
}
