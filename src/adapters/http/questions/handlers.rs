//! HTTP handlers for the Q&A endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::adapters::http::{ApiError, AppState};
use crate::application::AskQuestionCommand;
use crate::domain::reporting::QaExchange;

/// Body of `POST /questions`. A missing field is treated like a blank one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AskQuestionRequest {
    #[serde(default)]
    pub question: String,
}

/// POST /api/questions
pub async fn ask_question(
    State(state): State<AppState>,
    body: Result<Json<AskQuestionRequest>, JsonRejection>,
) -> Result<Json<QaExchange>, ApiError> {
    let Json(req) = body?;
    let exchange = state
        .ask_question_handler()
        .handle(AskQuestionCommand {
            question: req.question,
        })
        .await
        .map_err(|e| state.fail(e))?;
    Ok(Json(exchange))
}

/// GET /api/questions
pub async fn list_questions(State(state): State<AppState>) -> Result<Json<Vec<QaExchange>>, ApiError> {
    let history = state
        .list_questions_handler()
        .handle()
        .await
        .map_err(|e| state.fail(e))?;
    Ok(Json(history))
}
