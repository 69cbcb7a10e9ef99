//! Single bounded dispatch shared by the email and Slack handlers.

use std::future::Future;
use std::time::Duration;

use crate::domain::delivery::{DeliveryReceipt, DeliveryResult};
use crate::ports::TransportError;

/// Runs one transport call under `limit`. Failures and timeouts become a
/// failed result rather than an error so sibling dispatches are unaffected.
pub(super) async fn bounded<F>(recipient: Option<String>, limit: Duration, send: F) -> DeliveryResult
where
    F: Future<Output = Result<DeliveryReceipt, TransportError>>,
{
    let outcome = match tokio::time::timeout(limit, send).await {
        Ok(result) => result,
        Err(_) => Err(TransportError::Timeout(
            u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
        )),
    };

    match outcome {
        Ok(receipt) => DeliveryResult::delivered(recipient, receipt),
        Err(err) => {
            tracing::warn!(recipient = ?recipient, error = %err, "dispatch failed");
            DeliveryResult::failed(recipient, err.to_string())
        }
    }
}
