//! HTTP routes for decision endpoints.

use axum::routing::{get, patch};
use axum::Router;

use super::handlers::{create_decision, list_anomaly_decisions, list_decisions, update_decision};
use crate::adapters::http::AppState;

/// Creates the decision router (mounted under `/api`).
pub fn decision_routes() -> Router<AppState> {
    Router::new()
        .route("/decisions", get(list_decisions).post(create_decision))
        .route("/decisions/:id", patch(update_decision))
        .route("/anomalies/:id/decisions", get(list_anomaly_decisions))
}
