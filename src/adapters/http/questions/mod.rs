//! HTTP adapter for the Q&A endpoints.

mod handlers;
mod routes;

pub use handlers::AskQuestionRequest;
pub use routes::question_routes;
