//! State machine trait for status enums.
//!
//! Status enums declare their allowed edges once (usually as a table) and
//! get validated transitions and terminal-state checks from the trait.

use std::fmt::Debug;
use thiserror::Error;

/// Rejected transition between two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Cannot transition from {from:?} to {to:?}")]
pub struct TransitionError<S: Debug> {
    pub from: S,
    pub to: S,
}

/// Trait for status enums that represent state machines.
///
/// ```ignore
/// impl StateMachine for DecisionStatus {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         TRANSITIONS.iter().any(|(from, to, _)| from == self && to == target)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> { ... }
/// }
///
/// let next = current.transition_to(DecisionStatus::Accepted)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, TransitionError<Self>> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(TransitionError {
                from: *self,
                to: target,
            })
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
