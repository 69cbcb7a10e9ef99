//! HTTP routes for reporting endpoints.

use axum::routing::{get, patch};
use axum::Router;

use super::handlers::{
    get_anomaly, get_summary, get_user, list_anomalies, list_integrations, list_kpis,
    list_summaries, update_integration, weekly_changelog,
};
use crate::adapters::http::AppState;

/// Creates the reporting router (mounted under `/api`).
pub fn reporting_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(get_user))
        .route("/integrations", get(list_integrations))
        .route("/integrations/:id", patch(update_integration))
        .route("/summaries", get(list_summaries))
        .route("/summaries/:id", get(get_summary))
        .route("/kpis", get(list_kpis))
        .route("/anomalies", get(list_anomalies))
        .route("/anomalies/:id", get(get_anomaly))
        .route("/changelog/weekly", get(weekly_changelog))
}
