//! Strongly-typed identifier value objects.
//!
//! Identifiers in this domain are opaque strings (`dec_...`, `anom_001`,
//! `kpi_mrr`). Seeded entities carry hand-written ids; entities created at
//! runtime get a prefixed UUID.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ValidationError;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier, rejecting empty or whitespace-only values.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::empty_field(stringify!($name)));
                }
                Ok(Self(id))
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Identifier of a tracked decision.
    DecisionId
}

string_id! {
    /// Identifier of a detected anomaly.
    AnomalyId
}

string_id! {
    /// Identifier of a KPI.
    KpiId
}

string_id! {
    /// Identifier of a weekly or daily summary.
    SummaryId
}

string_id! {
    /// Identifier of a third-party integration.
    IntegrationId
}

string_id! {
    /// Identifier of a Q&A exchange.
    QuestionId
}

string_id! {
    /// Identifier of the dashboard user.
    UserId
}

impl DecisionId {
    /// Generates a fresh decision id.
    pub fn generate() -> Self {
        Self(format!("dec_{}", Uuid::new_v4().simple()))
    }
}

impl QuestionId {
    /// Generates a fresh Q&A id.
    pub fn generate() -> Self {
        Self(format!("qa_{}", Uuid::new_v4().simple()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_non_empty_ids() {
        let id = AnomalyId::new("anom_001").unwrap();
        assert_eq!(id.as_str(), "anom_001");
        assert_eq!(id.to_string(), "anom_001");
    }

    #[test]
    fn new_rejects_blank_ids() {
        assert!(DecisionId::new("").is_err());
        assert!(DecisionId::new("   ").is_err());
    }

    #[test]
    fn generated_decision_ids_are_prefixed_and_unique() {
        let a = DecisionId::generate();
        let b = DecisionId::generate();
        assert!(a.as_str().starts_with("dec_"));
        assert_ne!(a, b);
    }

    #[test]
    fn generated_question_ids_are_prefixed() {
        assert!(QuestionId::generate().as_str().starts_with("qa_"));
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = KpiId::new("kpi_mrr").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"kpi_mrr\"");
        let back: KpiId = serde_json::from_str("\"kpi_mrr\"").unwrap();
        assert_eq!(back, id);
    }
}
