//! HTTP adapter for decision endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::ListDecisionsParams;
pub use routes::decision_routes;
