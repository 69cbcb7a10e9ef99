//! Periodic AI-written operations summaries.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Entity, SummaryId, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryType {
    Weekly,
    Daily,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStatus {
    Draft,
    Delivered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryChannel {
    Slack,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightKind {
    Success,
    Warning,
    Info,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryHighlight {
    #[serde(rename = "type")]
    pub kind: HighlightKind,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarySection {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub id: SummaryId,
    #[serde(rename = "type")]
    pub summary_type: SummaryType,
    /// Display label such as "Week 3, 2026".
    pub period: String,
    pub date_range: String,
    pub created_at: Timestamp,
    pub status: SummaryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_via: Option<DeliveryChannel>,
    pub highlights: Vec<SummaryHighlight>,
    pub sections: Vec<SummarySection>,
    pub ai_insight: String,
}

impl Summary {
    /// Most recently created summary; ties keep the earlier entry.
    pub fn latest(summaries: &[Summary]) -> Option<&Summary> {
        summaries
            .iter()
            .reduce(|best, s| if s.created_at > best.created_at { s } else { best })
    }
}

impl Entity for Summary {
    const KIND: &'static str = "Summary";

    fn entity_id(&self) -> &str {
        self.id.as_str()
    }
}
