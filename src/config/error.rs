//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid dispatch timeout")]
    InvalidDispatchTimeout,

    #[error("Invalid app URL: {0}")]
    InvalidAppUrl(String),

    #[error("Invalid default recipient: {0}")]
    InvalidRecipient(String),

    #[error("Slack channel must start with '#': {0}")]
    InvalidSlackChannel(String),

    #[error("Invalid from email address")]
    InvalidFromEmail,

    #[error("Slack webhook URL must use HTTPS")]
    InvalidWebhookUrl,
}
