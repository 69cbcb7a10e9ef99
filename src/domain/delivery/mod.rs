//! Delivery domain module.
//!
//! Pure composition of outbound notifications: the weekly exec brief
//! (HTML + plain text email) and Slack critical-alert blocks, plus the
//! critical-alert predicate. No I/O happens here; transports live behind
//! the [`EmailSender`](crate::ports::EmailSender) and
//! [`SlackNotifier`](crate::ports::SlackNotifier) ports.

mod critical;
mod errors;
mod format;
mod result;
mod slack_alert;
mod weekly_brief;

pub use critical::is_critical;
pub use errors::DeliveryError;
pub use format::{
    change_arrow, change_colour, escape_html, format_change, format_kpi_value, format_number,
    format_revenue_range,
};
pub use result::{DeliveryReceipt, DeliveryResult, EmailMessage, SlackMessage};
pub use slack_alert::{
    severity_glyph, ButtonElement, SlackAlert, SlackAlertComposer, SlackBlock, TextKind,
    TextObject,
};
pub use weekly_brief::{
    BriefSelection, BriefSnapshot, WeeklyBrief, WeeklyBriefComposer, DEFAULT_PERIOD,
    MAX_ALERTS, MAX_DECISIONS, MAX_KPIS,
};
