//! AskQuestionHandler - Answers a question and records it in history.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::reporting::{QaExchange, Question, ReportingError};
use crate::ports::{EntityStore, QuestionAnswerer};

#[derive(Debug, Clone)]
pub struct AskQuestionCommand {
    pub question: String,
}

pub struct AskQuestionHandler {
    history: Arc<dyn EntityStore<QaExchange>>,
    answerer: Arc<dyn QuestionAnswerer>,
}

impl AskQuestionHandler {
    pub fn new(history: Arc<dyn EntityStore<QaExchange>>, answerer: Arc<dyn QuestionAnswerer>) -> Self {
        Self { history, answerer }
    }

    pub async fn handle(&self, cmd: AskQuestionCommand) -> Result<QaExchange, ReportingError> {
        // 1. Validate
        let question = Question::new(cmd.question)
            .map_err(|_| ReportingError::validation("question", "Question is required"))?;

        // 2. Answer against existing history
        let history = self.history.list().await?;
        let answer = self.answerer.answer(&question, &history).await?;

        // 3. Record
        let exchange = QaExchange::record(&question, answer, Timestamp::now());
        self.history.upsert(exchange.clone()).await?;

        tracing::info!(question_id = %exchange.id, confidence = exchange.confidence, "question answered");
        Ok(exchange)
    }
}
