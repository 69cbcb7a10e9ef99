//! ListQuestionsHandler - Q&A history in insertion order.

use std::sync::Arc;

use crate::domain::reporting::{QaExchange, ReportingError};
use crate::ports::EntityStore;

pub struct ListQuestionsHandler {
    history: Arc<dyn EntityStore<QaExchange>>,
}

impl ListQuestionsHandler {
    pub fn new(history: Arc<dyn EntityStore<QaExchange>>) -> Self {
        Self { history }
    }

    pub async fn handle(&self) -> Result<Vec<QaExchange>, ReportingError> {
        Ok(self.history.list().await?)
    }
}
