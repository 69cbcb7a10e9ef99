//! Decision-specific error types.

use crate::domain::foundation::{DecisionId, DomainError, ErrorCode};

/// Decision-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionError {
    /// Decision was not found.
    NotFound(DecisionId),
    /// Requested status change is not an allowed edge.
    InvalidTransition(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl DecisionError {
    pub fn not_found(id: DecisionId) -> Self {
        DecisionError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DecisionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        DecisionError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            DecisionError::NotFound(_) => ErrorCode::DecisionNotFound,
            DecisionError::InvalidTransition(_) => ErrorCode::InvalidStateTransition,
            DecisionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            DecisionError::Infrastructure(_) => ErrorCode::StoreUnavailable,
        }
    }
    pub fn message(&self) -> String {
        match self {
            DecisionError::NotFound(_) => "Decision not found".to_string(),
            DecisionError::InvalidTransition(msg) => msg.clone(),
            DecisionError::ValidationFailed { message, .. } => message.clone(),
            DecisionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for DecisionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DecisionError {}

impl From<DomainError> for DecisionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidStateTransition => DecisionError::InvalidTransition(err.message),
            ErrorCode::ValidationFailed => DecisionError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => DecisionError::Infrastructure(err.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_uses_plain_message() {
        let err = DecisionError::not_found(DecisionId::new("dec_x").unwrap());
        assert_eq!(err.message(), "Decision not found");
        assert_eq!(err.code(), ErrorCode::DecisionNotFound);
    }

    #[test]
    fn domain_validation_keeps_field() {
        let err: DecisionError = DomainError::validation("owner", "Owner cannot be empty").into();
        assert_eq!(
            err,
            DecisionError::ValidationFailed {
                field: "owner".to_string(),
                message: "Owner cannot be empty".to_string()
            }
        );
    }

    #[test]
    fn domain_transition_maps_to_invalid_transition() {
        let err: DecisionError =
            DomainError::new(ErrorCode::InvalidStateTransition, "Cannot transition").into();
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
    }
}
