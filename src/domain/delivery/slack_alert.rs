//! Slack Block Kit payload for a critical anomaly.

use serde::Serialize;

use super::format::format_revenue_range;
use crate::domain::reporting::{Anomaly, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKind {
    PlainText,
    Mrkdwn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextObject {
    #[serde(rename = "type")]
    pub kind: TextKind,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<bool>,
}

impl TextObject {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: TextKind::PlainText,
            text: text.into(),
            emoji: Some(true),
        }
    }

    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self {
            kind: TextKind::Mrkdwn,
            text: text.into(),
            emoji: None,
        }
    }
}

/// Link-style button inside an actions block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonElement {
    #[serde(rename = "type")]
    kind: &'static str,
    pub text: TextObject,
    pub url: String,
    pub action_id: String,
}

impl ButtonElement {
    pub fn link(label: impl Into<String>, url: impl Into<String>, action_id: impl Into<String>) -> Self {
        Self {
            kind: "button",
            text: TextObject::plain(label),
            url: url.into(),
            action_id: action_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlackBlock {
    Header {
        text: TextObject,
    },
    Section {
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<TextObject>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        fields: Vec<TextObject>,
    },
    Context {
        elements: Vec<TextObject>,
    },
    Actions {
        elements: Vec<ButtonElement>,
    },
}

/// Summary text plus blocks for one anomaly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackAlert {
    pub text: String,
    pub blocks: Vec<SlackBlock>,
}

pub fn severity_glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "🔴",
        Severity::Medium => "🟠",
        Severity::Low => "🟡",
    }
}

/// Builds Slack alerts that link back to the dashboard.
#[derive(Debug, Clone)]
pub struct SlackAlertComposer {
    app_url: String,
}

impl SlackAlertComposer {
    pub fn new(app_url: impl Into<String>) -> Self {
        Self {
            app_url: app_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn compose(&self, anomaly: &Anomaly) -> SlackAlert {
        let glyph = severity_glyph(anomaly.severity);

        let mut blocks = vec![
            SlackBlock::Header {
                text: TextObject::plain(format!("{} {}", glyph, anomaly.title)),
            },
            SlackBlock::Section {
                text: Some(TextObject::mrkdwn(anomaly.description.clone())),
                fields: Vec::new(),
            },
        ];

        // Impact blocks go in together or not at all.
        if let Some(impact) = &anomaly.impact {
            blocks.push(SlackBlock::Section {
                text: None,
                fields: vec![
                    TextObject::mrkdwn(format!(
                        "*Revenue at Risk:*\n{}",
                        format_revenue_range(&impact.revenue_at_risk)
                    )),
                    TextObject::mrkdwn(format!("*Confidence:*\n{}", impact.confidence)),
                ],
            });
            blocks.push(SlackBlock::Context {
                elements: vec![TextObject::mrkdwn(format!("⚠️ _{}_", impact.consequence))],
            });
        }

        blocks.push(SlackBlock::Actions {
            elements: vec![ButtonElement::link(
                "View in Dashboard",
                format!("{}/kpis", self.app_url),
                "view_dashboard",
            )],
        });

        SlackAlert {
            text: format!("{} Critical Alert: {}", glyph, anomaly.title),
            blocks,
        }
    }
}
