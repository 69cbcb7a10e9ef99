//! Key performance indicators.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Entity, KpiId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KpiCategory {
    Revenue,
    Retention,
    Satisfaction,
    Support,
    Engagement,
    Efficiency,
}

/// How a KPI value is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KpiFormat {
    Currency,
    #[serde(alias = "percentage")]
    Percent,
    Number,
    #[serde(alias = "duration")]
    Hours,
}

/// Whether a movement is good or bad for the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    Positive,
    Negative,
    Neutral,
}

/// Direction of the raw numeric change, independent of [`ChangeType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Up,
    Down,
    Flat,
}

impl ChangeDirection {
    pub fn of(change: f64) -> Self {
        if change > 0.0 {
            ChangeDirection::Up
        } else if change < 0.0 {
            ChangeDirection::Down
        } else {
            ChangeDirection::Flat
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpi {
    pub id: KpiId,
    pub name: String,
    pub short_name: String,
    pub category: KpiCategory,
    pub value: f64,
    pub previous_value: f64,
    pub unit: String,
    pub format: KpiFormat,
    /// Percent change versus the previous period.
    pub change: f64,
    pub change_type: ChangeType,
    pub trend: Vec<f64>,
    pub explanation: String,
}

impl Kpi {
    pub fn direction(&self) -> ChangeDirection {
        ChangeDirection::of(self.change)
    }
}

impl Entity for Kpi {
    const KIND: &'static str = "KPI";

    fn entity_id(&self) -> &str {
        self.id.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_follows_numeric_sign_only() {
        assert_eq!(ChangeDirection::of(34.3), ChangeDirection::Up);
        assert_eq!(ChangeDirection::of(-0.1), ChangeDirection::Down);
        assert_eq!(ChangeDirection::of(0.0), ChangeDirection::Flat);
    }

    #[test]
    fn format_accepts_legacy_aliases() {
        let f: KpiFormat = serde_json::from_str("\"percentage\"").unwrap();
        assert_eq!(f, KpiFormat::Percent);
        let f: KpiFormat = serde_json::from_str("\"duration\"").unwrap();
        assert_eq!(f, KpiFormat::Hours);
    }
}
