//! Email configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::fmt;

use super::error::ValidationError;

/// Email provider the sender would talk to once a real transport is wired in
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    #[default]
    Sendgrid,
    Ses,
    Resend,
}

impl fmt::Display for EmailProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EmailProvider::Sendgrid => "sendgrid",
            EmailProvider::Ses => "ses",
            EmailProvider::Resend => "resend",
        };
        write!(f, "{}", s)
    }
}

/// Email configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    #[serde(default)]
    pub provider: EmailProvider,

    /// Provider API key
    pub api_key: Option<SecretString>,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

impl EmailConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// True when an API key has been supplied.
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty())
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::default(),
            api_key: None,
            from_email: default_from_email(),
            from_name: default_from_name(),
        }
    }
}

fn default_from_email() -> String {
    "noreply@opsrep.app".to_string()
}

fn default_from_name() -> String {
    "OpsRep".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_config_defaults() {
        let config = EmailConfig::default();
        assert_eq!(config.provider, EmailProvider::Sendgrid);
        assert_eq!(config.from_header(), "OpsRep <noreply@opsrep.app>");
        assert!(!config.has_api_key());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_from_email() {
        let config = EmailConfig {
            from_email: "invalid-email".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidFromEmail));
    }

    #[test]
    fn test_api_key_is_redacted_in_debug() {
        let config = EmailConfig {
            api_key: Some(SecretString::new("SG.secret-value".to_string())),
            ..Default::default()
        };
        assert!(config.has_api_key());
        assert!(!format!("{:?}", config).contains("secret-value"));
    }

    #[test]
    fn test_deserialization() {
        let json = r#"{"provider": "ses", "api_key": "abc", "from_email": "ops@acme.com"}"#;
        let config: EmailConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.provider, EmailProvider::Ses);
        assert_eq!(config.from_name, "OpsRep");
        assert!(config.has_api_key());
    }
}
