//! Reporting query handlers (KPIs, anomalies, summaries, integrations, user).

mod anomalies;
mod integrations;
mod kpis;
mod summaries;
mod user_profile;
mod weekly_changelog;

pub use anomalies::{GetAnomalyHandler, GetAnomalyQuery, ListAnomaliesHandler, ListAnomaliesQuery};
pub use integrations::{ListIntegrationsHandler, UpdateIntegrationCommand, UpdateIntegrationHandler};
pub use kpis::{ListKpisHandler, ListKpisQuery};
pub use summaries::{GetSummaryHandler, GetSummaryQuery, ListSummariesHandler, ListSummariesQuery};
pub use user_profile::GetUserHandler;
pub use weekly_changelog::WeeklyChangelogHandler;
