//! Delivery configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Weekly brief and Slack alert delivery settings
#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryConfig {
    /// Dashboard URL linked from emails and Slack buttons
    #[serde(default = "default_app_url")]
    pub app_url: String,

    /// Recipients used when a request names none (comma-separated)
    #[serde(default = "default_recipients")]
    pub default_recipients: String,

    /// Channel used when a Slack alert request names none
    #[serde(default = "default_slack_channel")]
    pub default_slack_channel: String,

    /// Upper bound on a single transport dispatch, in seconds
    #[serde(default = "default_dispatch_timeout")]
    pub dispatch_timeout_secs: u64,
}

impl DeliveryConfig {
    pub fn default_recipients_list(&self) -> Vec<String> {
        self.default_recipients
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn dispatch_timeout(&self) -> Duration {
        Duration::from_secs(self.dispatch_timeout_secs)
    }

    /// Validate delivery configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.app_url.starts_with("http://") || self.app_url.starts_with("https://")) {
            return Err(ValidationError::InvalidAppUrl(self.app_url.clone()));
        }
        if let Some(bad) = self
            .default_recipients_list()
            .into_iter()
            .find(|r| !r.contains('@'))
        {
            return Err(ValidationError::InvalidRecipient(bad));
        }
        if !self.default_slack_channel.starts_with('#') {
            return Err(ValidationError::InvalidSlackChannel(
                self.default_slack_channel.clone(),
            ));
        }
        if self.dispatch_timeout_secs == 0 || self.dispatch_timeout_secs > 120 {
            return Err(ValidationError::InvalidDispatchTimeout);
        }
        Ok(())
    }
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            app_url: default_app_url(),
            default_recipients: default_recipients(),
            default_slack_channel: default_slack_channel(),
            dispatch_timeout_secs: default_dispatch_timeout(),
        }
    }
}

fn default_app_url() -> String {
    "http://localhost:3003".to_string()
}

fn default_recipients() -> String {
    "exec@example.com".to_string()
}

fn default_slack_channel() -> String {
    "#ops-alerts".to_string()
}

fn default_dispatch_timeout() -> u64 {
    10
}
