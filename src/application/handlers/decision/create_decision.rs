//! CreateDecisionHandler - Command handler for recording a new decision.

use std::sync::Arc;

use crate::domain::decision::{Decision, DecisionError, NewDecision};
use crate::domain::foundation::Timestamp;
use crate::ports::EntityStore;

/// Command to create a decision.
#[derive(Debug, Clone)]
pub struct CreateDecisionCommand {
    pub input: NewDecision,
}

/// Handler for creating decisions. New decisions always start `suggested`.
pub struct CreateDecisionHandler {
    store: Arc<dyn EntityStore<Decision>>,
}

impl CreateDecisionHandler {
    pub fn new(store: Arc<dyn EntityStore<Decision>>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CreateDecisionCommand) -> Result<Decision, DecisionError> {
        let decision = Decision::create(cmd.input, Timestamp::now())?;
        self.store.upsert(decision.clone()).await?;

        tracing::info!(
            decision_id = %decision.id(),
            owner = %decision.owner(),
            source = %decision.source().id,
            "decision created"
        );
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::decision::{DecisionSource, DecisionStatus, SourceKind};
    use crate::domain::reporting::{Confidence, ImpactEstimate, RevenueRange};
    use chrono::NaiveDate;

    fn input(title: &str) -> NewDecision {
        NewDecision {
            title: title.to_string(),
            description: String::new(),
            owner: "Dana".to_string(),
            due_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            source: DecisionSource {
                kind: SourceKind::Anomaly,
                id: "anom_001".to_string(),
                title: "Ticket Spike".to_string(),
            },
            impact: ImpactEstimate::new(RevenueRange::new(1000.0, 3000.0), Confidence::High, "Delayed fix"),
        }
    }

    #[tokio::test]
    async fn stores_new_suggested_decision() {
        let store = Arc::new(InMemoryStore::new());
        let handler = CreateDecisionHandler::new(store.clone());

        let decision = handler
            .handle(CreateDecisionCommand { input: input("Fix API limits") })
            .await
            .unwrap();

        assert_eq!(decision.status(), DecisionStatus::Suggested);
        assert_eq!(
            store.get(decision.id().as_str()).await.unwrap(),
            Some(decision)
        );
    }

    #[tokio::test]
    async fn rejects_blank_title_without_storing() {
        let store: Arc<InMemoryStore<Decision>> = Arc::new(InMemoryStore::new());
        let handler = CreateDecisionHandler::new(store.clone());

        let err = handler
            .handle(CreateDecisionCommand { input: input(" ") })
            .await
            .unwrap_err();

        assert!(matches!(err, DecisionError::ValidationFailed { ref field, .. } if field == "title"));
        assert!(store.is_empty().await);
    }
}
