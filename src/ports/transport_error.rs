use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Failure reported by an outbound transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Recipient rejected: {0}")]
    Rejected(String),

    #[error("Transport unavailable: {0}")]
    Unavailable(String),

    /// Elapsed bound in milliseconds.
    #[error("Dispatch timed out after {0}ms")]
    Timeout(u64),
}

impl From<TransportError> for DomainError {
    fn from(err: TransportError) -> Self {
        let code = match err {
            TransportError::Timeout(_) => ErrorCode::TransportTimeout,
            _ => ErrorCode::TransportFailed,
        };
        DomainError::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_maps_to_timeout_code() {
        let err: DomainError = TransportError::Timeout(10_000).into();
        assert_eq!(err.code, ErrorCode::TransportTimeout);
        assert_eq!(err.message, "Dispatch timed out after 10000ms");
    }
}
