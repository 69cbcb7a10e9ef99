//! OpsRep - Operations reporting service
//!
//! Serves KPIs, anomalies, weekly summaries and a Q&A history to the
//! dashboard, tracks the decisions taken in response to anomalies through
//! their lifecycle, and composes the weekly exec brief and Slack critical
//! alerts for delivery.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
