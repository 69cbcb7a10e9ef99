//! HTTP routes for delivery endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{list_critical_alerts, preview_weekly_brief, send_slack_alert, send_weekly_brief};
use crate::adapters::http::AppState;

pub fn delivery_routes() -> Router<AppState> {
    Router::new()
        .route("/delivery/weekly-brief", post(send_weekly_brief))
        .route("/delivery/weekly-brief/preview", get(preview_weekly_brief))
        .route("/delivery/slack-alert", post(send_slack_alert))
        .route("/delivery/critical-alerts", get(list_critical_alerts))
}
