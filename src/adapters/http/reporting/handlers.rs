//! HTTP handlers for reporting endpoints.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;

use crate::adapters::http::{ApiError, AppState};
use crate::application::{
    GetAnomalyQuery, GetSummaryQuery, ListAnomaliesQuery, ListKpisQuery, ListSummariesQuery,
    UpdateIntegrationCommand,
};
use crate::domain::foundation::{AnomalyId, IntegrationId, SummaryId};
use crate::domain::reporting::{
    Anomaly, Integration, IntegrationPatch, Kpi, Summary, UserProfile, WeeklyChangelog,
};

use super::dto::{AnomalyParams, KpiParams, SummaryParams};

/// GET /api/user
pub async fn get_user(State(state): State<AppState>) -> Result<Json<UserProfile>, ApiError> {
    let user = state.get_user_handler().handle().await.map_err(|e| state.fail(e))?;
    Ok(Json(user))
}

/// GET /api/integrations
pub async fn list_integrations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Integration>>, ApiError> {
    let integrations = state
        .list_integrations_handler()
        .handle()
        .await
        .map_err(|e| state.fail(e))?;
    Ok(Json(integrations))
}

/// PATCH /api/integrations/:id
pub async fn update_integration(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<IntegrationPatch>, JsonRejection>,
) -> Result<Json<Integration>, ApiError> {
    let Json(patch) = body?;
    let integration_id = IntegrationId::new(id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let integration = state
        .update_integration_handler()
        .handle(UpdateIntegrationCommand {
            integration_id,
            patch,
        })
        .await
        .map_err(|e| state.fail(e))?;
    Ok(Json(integration))
}

/// GET /api/summaries?type=
pub async fn list_summaries(
    State(state): State<AppState>,
    params: Result<Query<SummaryParams>, QueryRejection>,
) -> Result<Json<Vec<Summary>>, ApiError> {
    let Query(params) = params?;
    let summaries = state
        .list_summaries_handler()
        .handle(ListSummariesQuery {
            summary_type: params.summary_type,
        })
        .await
        .map_err(|e| state.fail(e))?;
    Ok(Json(summaries))
}

/// GET /api/summaries/:id
pub async fn get_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Summary>, ApiError> {
    let summary_id = SummaryId::new(id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let summary = state
        .get_summary_handler()
        .handle(GetSummaryQuery { summary_id })
        .await
        .map_err(|e| state.fail(e))?;
    Ok(Json(summary))
}

/// GET /api/kpis?category=
pub async fn list_kpis(
    State(state): State<AppState>,
    params: Result<Query<KpiParams>, QueryRejection>,
) -> Result<Json<Vec<Kpi>>, ApiError> {
    let Query(params) = params?;
    let kpis = state
        .list_kpis_handler()
        .handle(ListKpisQuery {
            category: params.category,
        })
        .await
        .map_err(|e| state.fail(e))?;
    Ok(Json(kpis))
}

/// GET /api/anomalies?status=
pub async fn list_anomalies(
    State(state): State<AppState>,
    params: Result<Query<AnomalyParams>, QueryRejection>,
) -> Result<Json<Vec<Anomaly>>, ApiError> {
    let Query(params) = params?;
    let anomalies = state
        .list_anomalies_handler()
        .handle(ListAnomaliesQuery {
            status: params.status,
        })
        .await
        .map_err(|e| state.fail(e))?;
    Ok(Json(anomalies))
}

/// GET /api/anomalies/:id
pub async fn get_anomaly(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Anomaly>, ApiError> {
    let anomaly_id = AnomalyId::new(id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let anomaly = state
        .get_anomaly_handler()
        .handle(GetAnomalyQuery { anomaly_id })
        .await
        .map_err(|e| state.fail(e))?;
    Ok(Json(anomaly))
}

/// GET /api/changelog/weekly
pub async fn weekly_changelog(
    State(state): State<AppState>,
) -> Result<Json<WeeklyChangelog>, ApiError> {
    let changelog = state
        .weekly_changelog_handler()
        .handle()
        .await
        .map_err(|e| state.fail(e))?;
    Ok(Json(changelog))
}
