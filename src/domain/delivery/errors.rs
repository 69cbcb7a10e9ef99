//! Delivery-specific error types.

use crate::domain::foundation::{AnomalyId, DomainError, ErrorCode};

/// Delivery-specific errors.
///
/// Per-recipient transport failures are not errors here: they are folded
/// into the aggregate [`DeliveryResult`](super::DeliveryResult).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// Anomaly to alert on was not found.
    AnomalyNotFound(AnomalyId),
    /// Validation failed (e.g. malformed recipient).
    ValidationFailed { field: String, message: String },
    /// A single-target dispatch failed.
    TransportFailed(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl DeliveryError {
    pub fn anomaly_not_found(id: AnomalyId) -> Self {
        DeliveryError::AnomalyNotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DeliveryError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            DeliveryError::AnomalyNotFound(_) => ErrorCode::AnomalyNotFound,
            DeliveryError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            DeliveryError::TransportFailed(_) => ErrorCode::TransportFailed,
            DeliveryError::Infrastructure(_) => ErrorCode::StoreUnavailable,
        }
    }
    pub fn message(&self) -> String {
        match self {
            DeliveryError::AnomalyNotFound(_) => "Anomaly not found".to_string(),
            DeliveryError::ValidationFailed { message, .. } => message.clone(),
            DeliveryError::TransportFailed(msg) => format!("Delivery failed: {}", msg),
            DeliveryError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DeliveryError {}

impl From<DomainError> for DeliveryError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => DeliveryError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::TransportFailed | ErrorCode::TransportTimeout => {
                DeliveryError::TransportFailed(err.message)
            }
            _ => DeliveryError::Infrastructure(err.message),
        }
    }
}
