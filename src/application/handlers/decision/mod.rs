//! Decision command and query handlers.

mod create_decision;
mod list_decisions;
mod update_decision;

pub use create_decision::{CreateDecisionCommand, CreateDecisionHandler};
pub use list_decisions::{
    ListAnomalyDecisionsHandler, ListAnomalyDecisionsQuery, ListDecisionsHandler,
    ListDecisionsQuery,
};
pub use update_decision::{UpdateDecisionCommand, UpdateDecisionHandler};
