//! HTTP handlers for decision endpoints.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::{
    CreateDecisionCommand, ListAnomalyDecisionsQuery, ListDecisionsQuery, UpdateDecisionCommand,
};
use crate::domain::decision::{Decision, DecisionPatch, NewDecision};
use crate::domain::foundation::{AnomalyId, DecisionId};

use super::dto::ListDecisionsParams;
use crate::adapters::http::{ApiError, AppState};

/// GET /api/decisions - List decisions, optionally by status
pub async fn list_decisions(
    State(state): State<AppState>,
    params: Result<Query<ListDecisionsParams>, QueryRejection>,
) -> Result<Json<Vec<Decision>>, ApiError> {
    let Query(params) = params?;
    let decisions = state
        .list_decisions_handler()
        .handle(ListDecisionsQuery {
            status: params.status,
        })
        .await
        .map_err(|e| state.fail(e))?;
    Ok(Json(decisions))
}

/// POST /api/decisions - Create a decision in `suggested`
pub async fn create_decision(
    State(state): State<AppState>,
    body: Result<Json<NewDecision>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = body?;
    let decision = state
        .create_decision_handler()
        .handle(CreateDecisionCommand { input })
        .await
        .map_err(|e| state.fail(e))?;
    Ok((StatusCode::CREATED, Json(decision)))
}

/// PATCH /api/decisions/:id - Partial update, including status moves
pub async fn update_decision(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<DecisionPatch>, JsonRejection>,
) -> Result<Json<Decision>, ApiError> {
    let Json(patch) = body?;
    let decision_id = DecisionId::new(id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let decision = state
        .update_decision_handler()
        .handle(UpdateDecisionCommand { decision_id, patch })
        .await
        .map_err(|e| state.fail(e))?;
    Ok(Json(decision))
}

/// GET /api/anomalies/:id/decisions - Decisions prompted by one anomaly
pub async fn list_anomaly_decisions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Decision>>, ApiError> {
    let anomaly_id = AnomalyId::new(id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let decisions = state
        .list_anomaly_decisions_handler()
        .handle(ListAnomalyDecisionsQuery { anomaly_id })
        .await
        .map_err(|e| state.fail(e))?;
    Ok(Json(decisions))
}
