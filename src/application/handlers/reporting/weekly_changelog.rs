//! WeeklyChangelogHandler - Builds the "what changed this week" view.

use std::sync::Arc;

use crate::domain::decision::Decision;
use crate::domain::foundation::Timestamp;
use crate::domain::reporting::{Anomaly, Kpi, ReportingError, Summary, WeeklyChangelog};
use crate::ports::EntityStore;

pub struct WeeklyChangelogHandler {
    summaries: Arc<dyn EntityStore<Summary>>,
    decisions: Arc<dyn EntityStore<Decision>>,
    anomalies: Arc<dyn EntityStore<Anomaly>>,
    kpis: Arc<dyn EntityStore<Kpi>>,
}

impl WeeklyChangelogHandler {
    pub fn new(
        summaries: Arc<dyn EntityStore<Summary>>,
        decisions: Arc<dyn EntityStore<Decision>>,
        anomalies: Arc<dyn EntityStore<Anomaly>>,
        kpis: Arc<dyn EntityStore<Kpi>>,
    ) -> Self {
        Self {
            summaries,
            decisions,
            anomalies,
            kpis,
        }
    }

    pub async fn handle(&self) -> Result<WeeklyChangelog, ReportingError> {
        let (summaries, decisions, anomalies, kpis) = tokio::try_join!(
            self.summaries.list(),
            self.decisions.list(),
            self.anomalies.list(),
            self.kpis.list(),
        )?;

        let changelog = WeeklyChangelog::build(
            Summary::latest(&summaries),
            &decisions,
            &anomalies,
            &kpis,
            Timestamp::now(),
        );
        tracing::debug!(events = changelog.events.len(), "weekly changelog built");
        Ok(changelog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixtures::SeedData;
    use crate::adapters::memory::InMemoryStore;

    #[tokio::test]
    async fn uses_latest_summary_period() {
        let seed = SeedData::load().unwrap();
        let handler = WeeklyChangelogHandler::new(
            Arc::new(InMemoryStore::with_entities(seed.summaries)),
            Arc::new(InMemoryStore::with_entities(seed.decisions)),
            Arc::new(InMemoryStore::with_entities(seed.anomalies)),
            Arc::new(InMemoryStore::with_entities(seed.kpis)),
        );

        let changelog = handler.handle().await.unwrap();

        assert_eq!(changelog.period, "Week 3, 2026");
        assert!(!changelog.events.is_empty());
        assert!(changelog
            .events
            .windows(2)
            .all(|pair| pair[0].date >= pair[1].date));
    }

    #[tokio::test]
    async fn empty_stores_use_placeholder_period() {
        let handler = WeeklyChangelogHandler::new(
            Arc::new(InMemoryStore::new()),
            Arc::new(InMemoryStore::new()),
            Arc::new(InMemoryStore::new()),
            Arc::new(InMemoryStore::new()),
        );

        let changelog = handler.handle().await.unwrap();

        assert_eq!(changelog.period, "This Week");
        assert!(changelog.events.is_empty());
    }
}
