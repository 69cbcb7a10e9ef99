//! Canned answers drawn from the Q&A history.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::reporting::{Answer, QaExchange, Question};
use crate::ports::QuestionAnswerer;

const GENERIC_CONFIDENCE: f64 = 0.85;

/// Reuses the first history answer whose question contains the new
/// question's first word; otherwise returns a generic answer.
#[derive(Debug, Clone, Default)]
pub struct CannedAnswerer;

impl CannedAnswerer {
    pub fn new() -> Self {
        Self
    }

    fn generic(question: &Question) -> Answer {
        Answer {
            text: format!(
                "Based on my analysis of your connected data sources, here's what I found regarding \"{}\":\n\n\
                 This is a demo response. In production, I would search through your Slack messages, \
                 Notion documents, and Stripe data to provide a comprehensive answer with specific \
                 insights and recommendations.",
                question.as_str()
            ),
            sources: vec!["Slack".to_string(), "Notion".to_string(), "Stripe".to_string()],
            confidence: GENERIC_CONFIDENCE,
        }
    }
}

#[async_trait]
impl QuestionAnswerer for CannedAnswerer {
    async fn answer(&self, question: &Question, history: &[QaExchange]) -> Result<Answer, DomainError> {
        let keyword = question.keyword();
        let matched = history
            .iter()
            .find(|qa| qa.question.to_lowercase().contains(&keyword));

        Ok(match matched {
            Some(qa) => {
                tracing::debug!(matched = %qa.id, "reusing canned answer");
                Answer {
                    text: qa.answer.clone(),
                    sources: qa.sources.clone(),
                    confidence: qa.confidence,
                }
            }
            None => Self::generic(question),
        })
    }
}
