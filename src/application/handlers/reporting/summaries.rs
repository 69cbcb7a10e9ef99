//! Summary query handlers.

use std::sync::Arc;

use crate::domain::foundation::{Filter, SummaryId};
use crate::domain::reporting::{ReportingError, Summary, SummaryType};
use crate::ports::EntityStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct ListSummariesQuery {
    pub summary_type: Filter<SummaryType>,
}

pub struct ListSummariesHandler {
    store: Arc<dyn EntityStore<Summary>>,
}

impl ListSummariesHandler {
    pub fn new(store: Arc<dyn EntityStore<Summary>>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListSummariesQuery) -> Result<Vec<Summary>, ReportingError> {
        let summaries = self.store.list().await?;
        tracing::debug!(count = summaries.len(), filter = ?query.summary_type, "listing summaries");
        Ok(summaries
            .into_iter()
            .filter(|s| query.summary_type.matches(&s.summary_type))
            .collect())
    }
}

#[derive(Debug, Clone)]
pub struct GetSummaryQuery {
    pub summary_id: SummaryId,
}

pub struct GetSummaryHandler {
    store: Arc<dyn EntityStore<Summary>>,
}

impl GetSummaryHandler {
    pub fn new(store: Arc<dyn EntityStore<Summary>>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetSummaryQuery) -> Result<Summary, ReportingError> {
        self.store
            .get(query.summary_id.as_str())
            .await?
            .ok_or_else(|| ReportingError::not_found("Summary", query.summary_id.as_str()))
    }
}
