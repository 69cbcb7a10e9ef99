//! Outbound payloads and delivery results.

use serde::Serialize;

use super::SlackBlock;
use crate::domain::foundation::Timestamp;

/// A fully composed email, ready for a transport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// A fully composed Slack message, ready for a transport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlackMessage {
    pub channel: String,
    pub text: String,
    pub blocks: Vec<SlackBlock>,
}

/// What a transport reports after accepting a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub message_id: String,
    pub sent_at: Timestamp,
}

/// Outcome of a single dispatch or of a bulk send.
///
/// Single dispatches carry `messageId`/`sentAt` (or `error`); bulk sends
/// carry `sent` and the per-recipient `results`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<DeliveryResult>>,
}

impl DeliveryResult {
    pub fn delivered(recipient: Option<String>, receipt: DeliveryReceipt) -> Self {
        Self {
            success: true,
            recipient,
            message_id: Some(receipt.message_id),
            sent_at: Some(receipt.sent_at),
            error: None,
            sent: None,
            results: None,
        }
    }

    pub fn failed(recipient: Option<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            recipient,
            message_id: None,
            sent_at: None,
            error: Some(error.into()),
            sent: None,
            results: None,
        }
    }

    /// Folds per-recipient results: success only if every dispatch succeeded,
    /// `sent` counts every attempted dispatch.
    pub fn aggregate(results: Vec<DeliveryResult>) -> Self {
        Self {
            success: results.iter().all(|r| r.success),
            recipient: None,
            message_id: None,
            sent_at: None,
            error: None,
            sent: Some(results.len()),
            results: Some(results),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(id: &str) -> DeliveryReceipt {
        DeliveryReceipt {
            message_id: id.to_string(),
            sent_at: Timestamp::now(),
        }
    }

    #[test]
    fn aggregate_reports_partial_failure() {
        let result = DeliveryResult::aggregate(vec![
            DeliveryResult::delivered(Some("a@x.com".into()), receipt("email_1")),
            DeliveryResult::failed(Some("b@x.com".into()), "timed out"),
        ]);
        assert!(!result.success);
        assert_eq!(result.sent, Some(2));
        assert_eq!(result.results.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn aggregate_of_nothing_is_success() {
        let result = DeliveryResult::aggregate(vec![]);
        assert!(result.success);
        assert_eq!(result.sent, Some(0));
    }

    #[test]
    fn single_result_omits_bulk_fields() {
        let value = serde_json::to_value(DeliveryResult::delivered(None, receipt("slack_1"))).unwrap();
        assert_eq!(value["messageId"], "slack_1");
        assert!(value.get("sent").is_none());
        assert!(value.get("error").is_none());
    }
}
