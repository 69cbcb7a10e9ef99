//! Reporting-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised by reporting queries, integrations and Q&A.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportingError {
    /// Entity of the given kind was not found.
    NotFound { kind: &'static str, id: String },
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl ReportingError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        ReportingError::NotFound { kind, id: id.into() }
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ReportingError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ReportingError::NotFound { kind, .. } => match *kind {
                "Anomaly" => ErrorCode::AnomalyNotFound,
                "Summary" => ErrorCode::SummaryNotFound,
                "Integration" => ErrorCode::IntegrationNotFound,
                "User" => ErrorCode::UserNotFound,
                _ => ErrorCode::InternalError,
            },
            ReportingError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ReportingError::Infrastructure(_) => ErrorCode::StoreUnavailable,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ReportingError::NotFound { kind, .. } => format!("{} not found", kind),
            ReportingError::ValidationFailed { message, .. } => message.clone(),
            ReportingError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReportingError::NotFound { .. })
    }
}

impl std::fmt::Display for ReportingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ReportingError {}

impl From<DomainError> for ReportingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => ReportingError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => ReportingError::Infrastructure(err.message),
        }
    }
}
