//! ListCriticalAlertsHandler - Anomalies eligible for proactive Slack alerts.

use std::sync::Arc;

use crate::domain::delivery::{is_critical, DeliveryError};
use crate::domain::reporting::Anomaly;
use crate::ports::EntityStore;

pub struct ListCriticalAlertsHandler {
    anomalies: Arc<dyn EntityStore<Anomaly>>,
}

impl ListCriticalAlertsHandler {
    pub fn new(anomalies: Arc<dyn EntityStore<Anomaly>>) -> Self {
        Self { anomalies }
    }

    pub async fn handle(&self) -> Result<Vec<Anomaly>, DeliveryError> {
        let anomalies = self.anomalies.list().await?;
        Ok(anomalies.into_iter().filter(is_critical).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixtures::SeedData;
    use crate::adapters::memory::InMemoryStore;

    #[tokio::test]
    async fn only_seeded_critical_anomaly_is_listed() {
        let store = Arc::new(InMemoryStore::with_entities(SeedData::load().unwrap().anomalies));
        let critical = ListCriticalAlertsHandler::new(store).handle().await.unwrap();
        let ids: Vec<_> = critical.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["anom_001"]);
    }
}
