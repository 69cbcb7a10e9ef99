//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, filters, errors)
//! - `reporting` - KPIs, anomalies, summaries, integrations, Q&A and the weekly changelog
//! - `decision` - Decision aggregate and its status lifecycle
//! - `delivery` - Weekly brief and Slack alert composition

pub mod decision;
pub mod delivery;
pub mod foundation;
pub mod reporting;
