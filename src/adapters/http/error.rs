//! HTTP error mapping shared by every route module.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::decision::DecisionError;
use crate::domain::delivery::DeliveryError;
use crate::domain::foundation::ErrorCode;
use crate::domain::reporting::ReportingError;

const GENERIC_INTERNAL_MESSAGE: &str = "Internal server error";

/// Error body returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    fn new(code: &str, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
        }
    }
}

/// API error that implements IntoResponse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    BadGateway(String),
    Internal(String),
}

impl ApiError {
    /// Replaces internal error text with a generic message unless `verbose`.
    pub fn redact(self, verbose: bool) -> Self {
        match self {
            ApiError::Internal(msg) if !verbose => {
                tracing::error!(error = %msg, "internal error");
                ApiError::Internal(GENERIC_INTERNAL_MESSAGE.to_string())
            }
            other => other,
        }
    }

    fn from_code(code: ErrorCode, message: String) -> Self {
        match code {
            ErrorCode::ValidationFailed => ApiError::BadRequest(message),
            ErrorCode::DecisionNotFound
            | ErrorCode::AnomalyNotFound
            | ErrorCode::SummaryNotFound
            | ErrorCode::IntegrationNotFound
            | ErrorCode::UserNotFound => ApiError::NotFound(message),
            ErrorCode::InvalidStateTransition => ApiError::Conflict(message),
            ErrorCode::TransportFailed | ErrorCode::TransportTimeout => ApiError::BadGateway(message),
            ErrorCode::StoreUnavailable | ErrorCode::InternalError => ApiError::Internal(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new("BAD_REQUEST", msg)),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::new("NOT_FOUND", msg)),
            ApiError::Conflict(msg) => (
                StatusCode::CONFLICT,
                ErrorResponse::new("INVALID_STATE_TRANSITION", msg),
            ),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, ErrorResponse::new("TRANSPORT_FAILED", msg)),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("INTERNAL_ERROR", msg),
            ),
        };
        (status, Json(body)).into_response()
    }
}

impl From<DecisionError> for ApiError {
    fn from(error: DecisionError) -> Self {
        ApiError::from_code(error.code(), error.message())
    }
}

impl From<ReportingError> for ApiError {
    fn from(error: ReportingError) -> Self {
        ApiError::from_code(error.code(), error.message())
    }
}

impl From<DeliveryError> for ApiError {
    fn from(error: DeliveryError) -> Self {
        ApiError::from_code(error.code(), error.message())
    }
}

impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<axum::extract::rejection::QueryRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DecisionId;

    #[test]
    fn decision_not_found_maps_to_404_message() {
        let err: ApiError = DecisionError::not_found(DecisionId::new("nope").unwrap()).into();
        assert_eq!(err, ApiError::NotFound("Decision not found".to_string()));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_transition_maps_to_conflict() {
        let err: ApiError = DecisionError::InvalidTransition("Cannot transition".to_string()).into();
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn internal_text_is_redacted_unless_verbose() {
        let err = ApiError::Internal("lock poisoned".to_string());
        assert_eq!(
            err.clone().redact(false),
            ApiError::Internal(GENERIC_INTERNAL_MESSAGE.to_string())
        );
        assert_eq!(err.clone().redact(true), err);
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let err: ApiError = ReportingError::validation("question", "Question is required").into();
        assert_eq!(err, ApiError::BadRequest("Question is required".to_string()));
    }
}
