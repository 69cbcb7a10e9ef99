//! Decision domain module.
//!
//! Decisions move through a small status lifecycle declared as a transition
//! table in [`status`]. Accepting stamps `acceptedAt`, completing stamps
//! `completedAt`; nothing else writes those fields.

mod aggregate;
mod errors;
mod patch;
mod status;

pub use aggregate::{Decision, DecisionSource, NewDecision, SourceKind};
pub use errors::DecisionError;
pub use patch::DecisionPatch;
pub use status::{DecisionStatus, LifecycleStamp};
