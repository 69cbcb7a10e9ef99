//! Slack configuration

use secrecy::SecretString;
use serde::Deserialize;

use super::error::ValidationError;

/// Slack configuration. Both values are optional while the notifier is a stub.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlackConfig {
    /// Incoming webhook URL
    pub webhook_url: Option<String>,

    /// Bot token for the Web API
    pub bot_token: Option<SecretString>,
}

impl SlackConfig {
    pub fn is_configured(&self) -> bool {
        self.webhook_url.is_some() || self.bot_token.is_some()
    }

    /// Validate Slack configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.webhook_url {
            Some(url) if !url.starts_with("https://") => Err(ValidationError::InvalidWebhookUrl),
            _ => Ok(()),
        }
    }
}
