//! Chat-style questions and their answers.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Entity, QuestionId, Timestamp, ValidationError};

/// A validated, non-blank question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("question"));
        }
        Ok(Self(text.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased first word, used for matching against history.
    pub fn keyword(&self) -> String {
        self.0
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }
}

/// Answer content produced by a [`QuestionAnswerer`](crate::ports::QuestionAnswerer).
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub text: String,
    pub sources: Vec<String>,
    pub confidence: f64,
}

/// One question together with its answer, as kept in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QaExchange {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub sources: Vec<String>,
    pub asked_at: Timestamp,
    pub confidence: f64,
}

impl QaExchange {
    pub fn record(question: &Question, answer: Answer, asked_at: Timestamp) -> Self {
        Self {
            id: QuestionId::generate(),
            question: question.as_str().to_string(),
            answer: answer.text,
            sources: answer.sources,
            asked_at,
            confidence: answer.confidence,
        }
    }
}

impl Entity for QaExchange {
    const KIND: &'static str = "Question";

    fn entity_id(&self) -> &str {
        self.id.as_str()
    }
}
