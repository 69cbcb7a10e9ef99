//! Application handlers.
//!
//! One command or query handler per operation, grouped by area. Handlers
//! hold `Arc<dyn Port>` dependencies and expose an async `handle`.

pub mod decision;
pub mod delivery;
pub mod questions;
pub mod reporting;
