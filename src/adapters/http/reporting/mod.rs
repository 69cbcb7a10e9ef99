//! HTTP adapter for reporting endpoints (user, integrations, summaries,
//! KPIs, anomalies, weekly changelog).

mod dto;
mod handlers;
mod routes;

pub use dto::{AnomalyParams, KpiParams, SummaryParams};
pub use routes::reporting_routes;
