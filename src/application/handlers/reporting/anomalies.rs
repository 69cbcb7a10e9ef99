//! Anomaly query handlers.

use std::sync::Arc;

use crate::domain::foundation::{AnomalyId, Filter};
use crate::domain::reporting::{Anomaly, AnomalyStatus, ReportingError};
use crate::ports::EntityStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct ListAnomaliesQuery {
    pub status: Filter<AnomalyStatus>,
}

pub struct ListAnomaliesHandler {
    store: Arc<dyn EntityStore<Anomaly>>,
}

impl ListAnomaliesHandler {
    pub fn new(store: Arc<dyn EntityStore<Anomaly>>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListAnomaliesQuery) -> Result<Vec<Anomaly>, ReportingError> {
        let anomalies = self.store.list().await?;
        Ok(anomalies
            .into_iter()
            .filter(|a| query.status.matches(&a.status))
            .collect())
    }
}

#[derive(Debug, Clone)]
pub struct GetAnomalyQuery {
    pub anomaly_id: AnomalyId,
}

pub struct GetAnomalyHandler {
    store: Arc<dyn EntityStore<Anomaly>>,
}

impl GetAnomalyHandler {
    pub fn new(store: Arc<dyn EntityStore<Anomaly>>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetAnomalyQuery) -> Result<Anomaly, ReportingError> {
        self.store
            .get(query.anomaly_id.as_str())
            .await?
            .ok_or_else(|| ReportingError::not_found("Anomaly", query.anomaly_id.as_str()))
    }
}
