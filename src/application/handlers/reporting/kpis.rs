//! ListKpisHandler - Query handler for KPIs by category.

use std::sync::Arc;

use crate::domain::foundation::Filter;
use crate::domain::reporting::{Kpi, KpiCategory, ReportingError};
use crate::ports::EntityStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct ListKpisQuery {
    pub category: Filter<KpiCategory>,
}

pub struct ListKpisHandler {
    store: Arc<dyn EntityStore<Kpi>>,
}

impl ListKpisHandler {
    pub fn new(store: Arc<dyn EntityStore<Kpi>>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListKpisQuery) -> Result<Vec<Kpi>, ReportingError> {
        let kpis = self.store.list().await?;
        Ok(kpis
            .into_iter()
            .filter(|k| query.category.matches(&k.category))
            .collect())
    }
}
