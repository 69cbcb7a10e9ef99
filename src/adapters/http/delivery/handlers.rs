//! HTTP handlers for delivery endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Html;
use axum::Json;

use crate::adapters::http::{ApiError, AppState};
use crate::application::{SendSlackAlertCommand, SendWeeklyBriefCommand};
use crate::domain::delivery::DeliveryResult;
use crate::domain::foundation::AnomalyId;
use crate::domain::reporting::Anomaly;

use super::dto::{SlackAlertRequest, WeeklyBriefRequest};

/// POST /api/delivery/weekly-brief - Email the brief to every recipient
pub async fn send_weekly_brief(
    State(state): State<AppState>,
    body: Result<Json<WeeklyBriefRequest>, JsonRejection>,
) -> Result<Json<DeliveryResult>, ApiError> {
    // A bare POST without a JSON body sends to the defaults.
    let req = match body {
        Ok(Json(req)) => req,
        Err(JsonRejection::MissingJsonContentType(_)) => WeeklyBriefRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };
    let result = state
        .send_weekly_brief_handler()
        .handle(SendWeeklyBriefCommand {
            recipients: req.recipients,
        })
        .await
        .map_err(|e| state.fail(e))?;
    Ok(Json(result))
}

/// GET /api/delivery/weekly-brief/preview - Brief HTML for manual inspection
pub async fn preview_weekly_brief(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let brief = state
        .preview_weekly_brief_handler()
        .handle()
        .await
        .map_err(|e| state.fail(e))?;
    Ok(Html(brief.html))
}

/// POST /api/delivery/slack-alert - Post one anomaly to Slack
pub async fn send_slack_alert(
    State(state): State<AppState>,
    body: Result<Json<SlackAlertRequest>, JsonRejection>,
) -> Result<Json<DeliveryResult>, ApiError> {
    let Json(req) = body?;
    let anomaly_id = AnomalyId::new(req.anomaly_id)
        .map_err(|_| ApiError::BadRequest("anomalyId is required".to_string()))?;
    let result = state
        .send_slack_alert_handler()
        .handle(SendSlackAlertCommand {
            anomaly_id,
            channel: req.channel,
        })
        .await
        .map_err(|e| state.fail(e))?;
    Ok(Json(result))
}

/// GET /api/delivery/critical-alerts
pub async fn list_critical_alerts(State(state): State<AppState>) -> Result<Json<Vec<Anomaly>>, ApiError> {
    let critical = state
        .list_critical_alerts_handler()
        .handle()
        .await
        .map_err(|e| state.fail(e))?;
    Ok(Json(critical))
}
