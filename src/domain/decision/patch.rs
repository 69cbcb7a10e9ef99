use chrono::NaiveDate;
use serde::Deserialize;

use super::{DecisionSource, DecisionStatus};
use crate::domain::reporting::ImpactEstimate;

/// Partial update for a decision.
///
/// Only caller-editable fields exist here; `id` and the lifecycle timestamps
/// are silently ignored if present in the request body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub owner: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub source: Option<DecisionSource>,
    pub status: Option<DecisionStatus>,
    pub impact: Option<ImpactEstimate>,
}

impl DecisionPatch {
    pub fn is_empty(&self) -> bool {
        *self == DecisionPatch::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn managed_fields_are_ignored() {
        let patch: DecisionPatch = serde_json::from_value(json!({
            "status": "accepted",
            "acceptedAt": "2020-01-01T00:00:00Z",
            "id": "dec_forged"
        }))
        .unwrap();
        assert_eq!(patch.status, Some(DecisionStatus::Accepted));
        assert!(patch.title.is_none());
    }

    #[test]
    fn empty_body_is_empty_patch() {
        let patch: DecisionPatch = serde_json::from_value(json!({})).unwrap();
        assert!(patch.is_empty());
    }
}
