//! HTTP adapter for delivery endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{SlackAlertRequest, WeeklyBriefRequest};
pub use routes::delivery_routes;
