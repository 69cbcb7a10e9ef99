//! HTTP routes for the Q&A endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{ask_question, list_questions};
use crate::adapters::http::AppState;

pub fn question_routes() -> Router<AppState> {
    Router::new().route("/questions", get(list_questions).post(ask_question))
}
