//! Decision status lifecycle.
//!
//! ```text
//! suggested ──► accepted ──► done
//!     │             │
//!     └─────────────┴──► dismissed
//! ```
//!
//! `done` and `dismissed` are terminal. Skipping `accepted` (suggested ──► done)
//! is rejected so that `acceptedAt` is always set on the way to `done`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    Suggested,
    Accepted,
    Done,
    Dismissed,
}

/// Lifecycle timestamp written as a side effect of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStamp {
    AcceptedAt,
    CompletedAt,
}

/// Allowed edges and the timestamp each one stamps.
const TRANSITIONS: &[(DecisionStatus, DecisionStatus, Option<LifecycleStamp>)] = &[
    (
        DecisionStatus::Suggested,
        DecisionStatus::Accepted,
        Some(LifecycleStamp::AcceptedAt),
    ),
    (
        DecisionStatus::Accepted,
        DecisionStatus::Done,
        Some(LifecycleStamp::CompletedAt),
    ),
    (DecisionStatus::Suggested, DecisionStatus::Dismissed, None),
    (DecisionStatus::Accepted, DecisionStatus::Dismissed, None),
];

impl DecisionStatus {
    /// Returns the stamp produced by moving to `target`, if the edge exists and stamps one.
    pub fn stamp_for(&self, target: DecisionStatus) -> Option<LifecycleStamp> {
        TRANSITIONS
            .iter()
            .find(|(from, to, _)| from == self && *to == target)
            .and_then(|(_, _, stamp)| *stamp)
    }

    /// Accepted or done decisions are the ones that made it into the brief.
    pub fn is_acted_upon(&self) -> bool {
        matches!(self, DecisionStatus::Accepted | DecisionStatus::Done)
    }
}

impl StateMachine for DecisionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        TRANSITIONS
            .iter()
            .any(|(from, to, _)| from == self && to == target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        TRANSITIONS
            .iter()
            .filter(|(from, _, _)| from == self)
            .map(|(_, to, _)| *to)
            .collect()
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DecisionStatus::Suggested => "suggested",
            DecisionStatus::Accepted => "accepted",
            DecisionStatus::Done => "done",
            DecisionStatus::Dismissed => "dismissed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DecisionStatus::*;

    const ALL: [DecisionStatus; 4] = [Suggested, Accepted, Done, Dismissed];

    #[test]
    fn suggested_can_be_accepted_or_dismissed() {
        assert_eq!(Suggested.valid_transitions(), vec![Accepted, Dismissed]);
    }

    #[test]
    fn accepted_can_be_done_or_dismissed() {
        assert_eq!(Accepted.valid_transitions(), vec![Done, Dismissed]);
    }

    #[test]
    fn done_and_dismissed_are_terminal() {
        assert!(Done.is_terminal());
        assert!(Dismissed.is_terminal());
        assert!(!Suggested.is_terminal());
        assert!(!Accepted.is_terminal());
    }

    #[test]
    fn skipping_accepted_is_rejected() {
        assert!(!Suggested.can_transition_to(&Done));
        assert!(Suggested.transition_to(Done).is_err());
    }

    #[test]
    fn only_two_edges_stamp() {
        assert_eq!(Suggested.stamp_for(Accepted), Some(LifecycleStamp::AcceptedAt));
        assert_eq!(Accepted.stamp_for(Done), Some(LifecycleStamp::CompletedAt));

        let stamped = ALL
            .iter()
            .flat_map(|from| ALL.iter().map(move |to| (*from, *to)))
            .filter(|(from, to)| from.stamp_for(*to).is_some())
            .count();
        assert_eq!(stamped, 2);
    }

    #[test]
    fn stamp_for_unknown_edge_is_none() {
        assert_eq!(Done.stamp_for(Accepted), None);
        assert_eq!(Suggested.stamp_for(Suggested), None);
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(serde_json::to_string(&Dismissed).unwrap(), "\"dismissed\"");
        assert_eq!(serde_json::from_str::<DecisionStatus>("\"done\"").unwrap(), Done);
    }
}
