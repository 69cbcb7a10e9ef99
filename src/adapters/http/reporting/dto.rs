//! Query string types for reporting endpoints.

use serde::Deserialize;

use crate::domain::foundation::Filter;
use crate::domain::reporting::{AnomalyStatus, KpiCategory, SummaryType};

/// `GET /summaries?type=`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SummaryParams {
    #[serde(default, rename = "type")]
    pub summary_type: Filter<SummaryType>,
}

/// `GET /kpis?category=`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct KpiParams {
    #[serde(default)]
    pub category: Filter<KpiCategory>,
}

/// `GET /anomalies?status=`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct AnomalyParams {
    #[serde(default)]
    pub status: Filter<AnomalyStatus>,
}
