//! Detected deviations of a business metric from its expected range.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ImpactEstimate;
use crate::domain::foundation::{AnomalyId, Entity, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyStatus {
    Investigating,
    Acknowledged,
    Resolved,
}

impl fmt::Display for AnomalyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AnomalyStatus::Investigating => "investigating",
            AnomalyStatus::Acknowledged => "acknowledged",
            AnomalyStatus::Resolved => "resolved",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anomaly {
    pub id: AnomalyId,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub metric: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_range: Option<[f64; 2]>,
    pub detected_at: Timestamp,
    pub possible_causes: Vec<String>,
    pub recommended_actions: Vec<String>,
    pub status: AnomalyStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<ImpactEstimate>,
}

impl Anomaly {
    pub fn is_resolved(&self) -> bool {
        self.status == AnomalyStatus::Resolved
    }
}

impl Entity for Anomaly {
    const KIND: &'static str = "Anomaly";

    fn entity_id(&self) -> &str {
        self.id.as_str()
    }
}
