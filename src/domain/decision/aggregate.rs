//! Decision aggregate.
//!
//! A decision is a suggested or tracked remediation action, usually prompted
//! by an anomaly. Status changes go through [`Decision::apply`], which is the
//! only place lifecycle timestamps are written.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DecisionPatch, DecisionStatus, LifecycleStamp};
use crate::domain::foundation::{
    AnomalyId, DecisionId, DomainError, Entity, ErrorCode, StateMachine, Timestamp,
};
use crate::domain::reporting::ImpactEstimate;

/// What kind of record prompted the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Anomaly,
    Summary,
    Ai,
}

/// Reference to the record that prompted a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionSource {
    #[serde(rename = "type")]
    pub kind: SourceKind,
    pub id: String,
    pub title: String,
}

impl DecisionSource {
    pub fn references_anomaly(&self, anomaly_id: &AnomalyId) -> bool {
        self.kind == SourceKind::Anomaly && self.id == anomaly_id.as_str()
    }
}

/// Caller-supplied fields for a new decision.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDecision {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub owner: String,
    pub due_date: NaiveDate,
    pub source: DecisionSource,
    pub impact: ImpactEstimate,
}

/// Decision aggregate.
///
/// # Invariants
///
/// - `title` and `owner` are non-blank
/// - `impact.revenueAtRisk` satisfies `0 <= low <= high`
/// - `accepted_at` is set once the decision has been accepted
/// - `completed_at` is set iff status is `done`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    id: DecisionId,
    title: String,
    description: String,
    owner: String,
    due_date: NaiveDate,
    source: DecisionSource,
    status: DecisionStatus,
    suggested_at: Timestamp,
    accepted_at: Option<Timestamp>,
    completed_at: Option<Timestamp>,
    impact: ImpactEstimate,
}

impl Decision {
    /// Creates a decision in `suggested` status.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if title or owner is blank, or the impact range is invalid
    pub fn create(input: NewDecision, now: Timestamp) -> Result<Self, DomainError> {
        Self::validate_text("title", &input.title)?;
        Self::validate_text("owner", &input.owner)?;
        input.impact.validate()?;

        Ok(Self {
            id: DecisionId::generate(),
            title: input.title.trim().to_string(),
            description: input.description,
            owner: input.owner.trim().to_string(),
            due_date: input.due_date,
            source: input.source,
            status: DecisionStatus::Suggested,
            suggested_at: now,
            accepted_at: None,
            completed_at: None,
            impact: input.impact,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &DecisionId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn source(&self) -> &DecisionSource {
        &self.source
    }

    pub fn status(&self) -> DecisionStatus {
        self.status
    }

    pub fn suggested_at(&self) -> Timestamp {
        self.suggested_at
    }

    pub fn accepted_at(&self) -> Option<Timestamp> {
        self.accepted_at
    }

    pub fn completed_at(&self) -> Option<Timestamp> {
        self.completed_at
    }

    pub fn impact(&self) -> &ImpactEstimate {
        &self.impact
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies a partial update, returning the lifecycle stamp it produced.
    ///
    /// Every field is validated before anything is written, so a rejected
    /// patch leaves the decision untouched. Requesting the current status
    /// again is a no-op for status and timestamps.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` for blank title/owner or an invalid impact range
    /// - `InvalidStateTransition` if the status edge is not allowed
    pub fn apply(
        &mut self,
        patch: DecisionPatch,
        now: Timestamp,
    ) -> Result<Option<LifecycleStamp>, DomainError> {
        if let Some(title) = &patch.title {
            Self::validate_text("title", title)?;
        }
        if let Some(owner) = &patch.owner {
            Self::validate_text("owner", owner)?;
        }
        if let Some(impact) = &patch.impact {
            impact.validate()?;
        }

        let stamp = match patch.status {
            Some(target) if target != self.status => {
                self.status.transition_to(target).map_err(|e| {
                    DomainError::new(ErrorCode::InvalidStateTransition, e.to_string())
                        .with_detail("from", self.status.to_string())
                        .with_detail("to", target.to_string())
                })?;
                self.status.stamp_for(target)
            }
            _ => None,
        };

        if let Some(title) = patch.title {
            self.title = title.trim().to_string();
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(owner) = patch.owner {
            self.owner = owner.trim().to_string();
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(source) = patch.source {
            self.source = source;
        }
        if let Some(impact) = patch.impact {
            self.impact = impact;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        match stamp {
            Some(LifecycleStamp::AcceptedAt) => self.accepted_at = Some(now),
            Some(LifecycleStamp::CompletedAt) => self.completed_at = Some(now),
            None => {}
        }

        Ok(stamp)
    }

    /// Checks the timestamp invariants of a decision loaded from outside.
    pub fn check_lifecycle(&self) -> Result<(), DomainError> {
        let accepted_ok = match self.status {
            DecisionStatus::Suggested => self.accepted_at.is_none(),
            DecisionStatus::Accepted | DecisionStatus::Done => self.accepted_at.is_some(),
            DecisionStatus::Dismissed => true,
        };
        let completed_ok = self.completed_at.is_some() == (self.status == DecisionStatus::Done);
        if accepted_ok && completed_ok {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Decision {} has timestamps inconsistent with status {}", self.id, self.status),
            ))
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_text(field: &str, value: &str) -> Result<(), DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::validation(
                field,
                format!("{} cannot be empty", capitalize(field)),
            ));
        }
        Ok(())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Entity for Decision {
    const KIND: &'static str = "Decision";

    fn entity_id(&self) -> &str {
        self.id.as_str()
    }
}
