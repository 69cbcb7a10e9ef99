//! Question answering port.
//!
//! The only implementation today returns canned answers drawn from the Q&A
//! history; a retrieval-backed answerer would plug in here.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::reporting::{Answer, QaExchange, Question};

#[async_trait]
pub trait QuestionAnswerer: Send + Sync {
    /// Answers `question`, optionally reusing prior exchanges in `history`.
    async fn answer(&self, question: &Question, history: &[QaExchange]) -> Result<Answer, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_answerer_is_object_safe() {
        fn _accepts_dyn(_answerer: &dyn QuestionAnswerer) {}
    }
}
