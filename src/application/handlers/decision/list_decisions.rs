//! Decision list queries.

use std::sync::Arc;

use crate::domain::decision::{Decision, DecisionError, DecisionStatus};
use crate::domain::foundation::{AnomalyId, Filter};
use crate::ports::EntityStore;

/// Query for decisions, optionally narrowed to one status.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListDecisionsQuery {
    pub status: Filter<DecisionStatus>,
}

pub struct ListDecisionsHandler {
    store: Arc<dyn EntityStore<Decision>>,
}

impl ListDecisionsHandler {
    pub fn new(store: Arc<dyn EntityStore<Decision>>) -> Self {
        Self { store }
    }

    /// Returns decisions in store order.
    pub async fn handle(&self, query: ListDecisionsQuery) -> Result<Vec<Decision>, DecisionError> {
        let decisions = self.store.list().await?;
        Ok(decisions
            .into_iter()
            .filter(|d| query.status.matches(&d.status()))
            .collect())
    }
}

/// Query for decisions prompted by one anomaly.
#[derive(Debug, Clone)]
pub struct ListAnomalyDecisionsQuery {
    pub anomaly_id: AnomalyId,
}

pub struct ListAnomalyDecisionsHandler {
    store: Arc<dyn EntityStore<Decision>>,
}

impl ListAnomalyDecisionsHandler {
    pub fn new(store: Arc<dyn EntityStore<Decision>>) -> Self {
        Self { store }
    }

    /// Returns matching decisions in store order; empty for unknown anomalies.
    pub async fn handle(
        &self,
        query: ListAnomalyDecisionsQuery,
    ) -> Result<Vec<Decision>, DecisionError> {
        let decisions = self.store.list().await?;
        Ok(decisions
            .into_iter()
            .filter(|d| d.source().references_anomaly(&query.anomaly_id))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixtures::SeedData;
    use crate::adapters::memory::InMemoryStore;

    fn store() -> Arc<InMemoryStore<Decision>> {
        Arc::new(InMemoryStore::with_entities(SeedData::load().unwrap().decisions))
    }

    #[tokio::test]
    async fn all_filter_returns_everything_in_order() {
        let handler = ListDecisionsHandler::new(store());
        let ids: Vec<_> = handler
            .handle(ListDecisionsQuery::default())
            .await
            .unwrap()
            .iter()
            .map(|d| d.id().to_string())
            .collect();
        assert_eq!(ids, vec!["dec_001", "dec_002", "dec_003", "dec_004"]);
    }

    #[tokio::test]
    async fn status_filter_narrows_results() {
        let handler = ListDecisionsHandler::new(store());
        let done = handler
            .handle(ListDecisionsQuery {
                status: Filter::Only(DecisionStatus::Done),
            })
            .await
            .unwrap();
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].id().as_str(), "dec_003");
    }

    #[tokio::test]
    async fn repeated_listing_is_stable() {
        let handler = ListDecisionsHandler::new(store());
        let first = handler.handle(ListDecisionsQuery::default()).await.unwrap();
        let second = handler.handle(ListDecisionsQuery::default()).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn anomaly_scope_matches_source_reference() {
        let handler = ListAnomalyDecisionsHandler::new(store());
        let scoped = handler
            .handle(ListAnomalyDecisionsQuery {
                anomaly_id: AnomalyId::new("anom_002").unwrap(),
            })
            .await
            .unwrap();
        let ids: Vec<_> = scoped.iter().map(|d| d.id().as_str()).collect();
        assert_eq!(ids, vec!["dec_002"]);
    }

    #[tokio::test]
    async fn unknown_anomaly_yields_empty_list() {
        let handler = ListAnomalyDecisionsHandler::new(store());
        let scoped = handler
            .handle(ListAnomalyDecisionsQuery {
                anomaly_id: AnomalyId::new("anom_999").unwrap(),
            })
            .await
            .unwrap();
        assert!(scoped.is_empty());
    }
}
