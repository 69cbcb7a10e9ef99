//! Request types for delivery endpoints.

use serde::Deserialize;

/// Body of `POST /delivery/weekly-brief`. Omitted or empty recipients
/// fall back to the configured defaults rather than sending to nobody.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeeklyBriefRequest {
    #[serde(default)]
    pub recipients: Vec<String>,
}

/// Body of `POST /delivery/slack-alert`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlackAlertRequest {
    #[serde(default)]
    pub anomaly_id: String,
    #[serde(default)]
    pub channel: Option<String>,
}
