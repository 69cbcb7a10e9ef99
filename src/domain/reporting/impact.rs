//! Impact estimate value object shared by anomalies and decisions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// How sure the estimate is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        };
        write!(f, "{}", s)
    }
}

/// Revenue-at-risk range in euros, serialized as `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct RevenueRange {
    pub low: f64,
    pub high: f64,
}

impl RevenueRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Checks `0 <= low <= high` with finite bounds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(ValidationError::invalid_format(
                "impact.revenueAtRisk",
                "bounds must be finite numbers",
            ));
        }
        if self.low < 0.0 || self.high < 0.0 {
            return Err(ValidationError::out_of_range(
                "impact.revenueAtRisk",
                "bounds must not be negative",
            ));
        }
        if self.low > self.high {
            return Err(ValidationError::out_of_range(
                "impact.revenueAtRisk",
                format!("low ({}) exceeds high ({})", self.low, self.high),
            ));
        }
        Ok(())
    }
}

impl From<[f64; 2]> for RevenueRange {
    fn from([low, high]: [f64; 2]) -> Self {
        Self { low, high }
    }
}

impl From<RevenueRange> for [f64; 2] {
    fn from(range: RevenueRange) -> Self {
        [range.low, range.high]
    }
}

/// Structured guess at financial exposure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactEstimate {
    pub revenue_at_risk: RevenueRange,
    pub confidence: Confidence,
    pub consequence: String,
}

impl ImpactEstimate {
    pub fn new(revenue_at_risk: RevenueRange, confidence: Confidence, consequence: impl Into<String>) -> Self {
        Self {
            revenue_at_risk,
            confidence,
            consequence: consequence.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.revenue_at_risk.validate()
    }
}
