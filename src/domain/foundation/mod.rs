//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, filters, the state machine trait and
//! error types that form the vocabulary of the OpsRep domain.

mod entity;
mod errors;
mod filter;
mod ids;
mod state_machine;
mod timestamp;

pub use entity::Entity;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use filter::Filter;
pub use ids::{AnomalyId, DecisionId, IntegrationId, KpiId, QuestionId, SummaryId, UserId};
pub use state_machine::{StateMachine, TransitionError};
pub use timestamp::Timestamp;
