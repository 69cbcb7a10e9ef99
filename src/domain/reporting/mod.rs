//! Reporting domain module.
//!
//! Read-mostly entities shown on the dashboard and consumed by delivery:
//! KPIs, anomalies, summaries, integrations, the user profile and the Q&A
//! history, plus the weekly changelog view built from them.

mod anomaly;
mod changelog;
mod errors;
mod impact;
mod integration;
mod kpi;
mod question;
mod summary;
mod user;

pub use anomaly::{Anomaly, AnomalyStatus, Severity};
pub use changelog::{ChangelogEvent, ChangelogEventKind, WeeklyChangelog, KPI_CHANGE_THRESHOLD};
pub use errors::ReportingError;
pub use impact::{Confidence, ImpactEstimate, RevenueRange};
pub use integration::{Integration, IntegrationKind, IntegrationPatch, IntegrationStatus};
pub use kpi::{ChangeDirection, ChangeType, Kpi, KpiCategory, KpiFormat};
pub use question::{Answer, QaExchange, Question};
pub use summary::{
    DeliveryChannel, HighlightKind, Summary, SummaryHighlight, SummarySection, SummaryStatus,
    SummaryType,
};
pub use user::UserProfile;
