//! UpdateDecisionHandler - Command handler for partial decision updates.

use std::sync::Arc;

use crate::domain::decision::{Decision, DecisionError, DecisionPatch};
use crate::domain::foundation::{DecisionId, Timestamp};
use crate::ports::EntityStore;

/// Command to apply a partial update.
#[derive(Debug, Clone)]
pub struct UpdateDecisionCommand {
    pub decision_id: DecisionId,
    pub patch: DecisionPatch,
}

/// Handler for updating decisions.
///
/// Status changes are validated against the lifecycle table and stamp
/// `acceptedAt`/`completedAt` as a side effect. Concurrent updates to the
/// same decision are last-write-wins.
pub struct UpdateDecisionHandler {
    store: Arc<dyn EntityStore<Decision>>,
}

impl UpdateDecisionHandler {
    pub fn new(store: Arc<dyn EntityStore<Decision>>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: UpdateDecisionCommand) -> Result<Decision, DecisionError> {
        // 1. Load decision
        let mut decision = self
            .store
            .get(cmd.decision_id.as_str())
            .await?
            .ok_or_else(|| DecisionError::not_found(cmd.decision_id.clone()))?;

        // 2. Apply patch (validates before mutating)
        let from = decision.status();
        let stamp = decision.apply(cmd.patch, Timestamp::now())?;

        // 3. Persist
        self.store.upsert(decision.clone()).await?;

        if from != decision.status() {
            tracing::info!(
                decision_id = %decision.id(),
                from = %from,
                to = %decision.status(),
                stamp = ?stamp,
                "decision status changed"
            );
        }
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::decision::{DecisionSource, DecisionStatus, NewDecision, SourceKind};
    use crate::domain::reporting::{Confidence, ImpactEstimate, RevenueRange};
    use chrono::NaiveDate;

    async fn seeded() -> (Arc<InMemoryStore<Decision>>, DecisionId) {
        let decision = Decision::create(
            NewDecision {
                title: "Fix API limits".to_string(),
                description: String::new(),
                owner: "Dana".to_string(),
                due_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
                source: DecisionSource {
                    kind: SourceKind::Anomaly,
                    id: "anom_001".to_string(),
                    title: "Ticket Spike".to_string(),
                },
                impact: ImpactEstimate::new(RevenueRange::new(1000.0, 3000.0), Confidence::High, "x"),
            },
            Timestamp::now(),
        )
        .unwrap();
        let id = decision.id().clone();
        (Arc::new(InMemoryStore::with_entities(vec![decision])), id)
    }

    fn status(decision_id: &DecisionId, status: DecisionStatus) -> UpdateDecisionCommand {
        UpdateDecisionCommand {
            decision_id: decision_id.clone(),
            patch: DecisionPatch {
                status: Some(status),
                ..Default::default()
            },
        }
    }

    #[tokio::test]
    async fn accept_then_complete_persists_stamps() {
        let (store, id) = seeded().await;
        let handler = UpdateDecisionHandler::new(store.clone());

        let accepted = handler.handle(status(&id, DecisionStatus::Accepted)).await.unwrap();
        assert!(accepted.accepted_at().is_some());

        let done = handler.handle(status(&id, DecisionStatus::Done)).await.unwrap();
        assert!(done.completed_at().is_some());
        assert_eq!(done.accepted_at(), accepted.accepted_at());

        let stored = store.get(id.as_str()).await.unwrap().unwrap();
        assert_eq!(stored, done);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found_and_creates_nothing() {
        let (store, _) = seeded().await;
        let handler = UpdateDecisionHandler::new(store.clone());
        let missing = DecisionId::new("nonexistent-id").unwrap();

        let err = handler.handle(status(&missing, DecisionStatus::Accepted)).await.unwrap_err();

        assert_eq!(err, DecisionError::NotFound(missing));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn invalid_transition_leaves_stored_decision_unchanged() {
        let (store, id) = seeded().await;
        let before = store.get(id.as_str()).await.unwrap();
        let handler = UpdateDecisionHandler::new(store.clone());

        let err = handler.handle(status(&id, DecisionStatus::Done)).await.unwrap_err();

        assert!(matches!(err, DecisionError::InvalidTransition(_)));
        assert_eq!(store.get(id.as_str()).await.unwrap(), before);
    }
}
