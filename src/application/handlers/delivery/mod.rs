//! Delivery handlers: weekly brief, Slack alerts and the critical-alert list.

mod dispatch;
mod list_critical_alerts;
mod preview_weekly_brief;
mod send_slack_alert;
mod send_weekly_brief;
mod snapshot;

pub use list_critical_alerts::ListCriticalAlertsHandler;
pub use preview_weekly_brief::PreviewWeeklyBriefHandler;
pub use send_slack_alert::{SendSlackAlertCommand, SendSlackAlertHandler};
pub use send_weekly_brief::{SendWeeklyBriefCommand, SendWeeklyBriefHandler};
pub use snapshot::BriefSnapshotLoader;
