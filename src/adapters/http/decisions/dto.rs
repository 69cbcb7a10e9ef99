//! Request types for decision endpoints. Responses serialize the
//! [`Decision`](crate::domain::decision::Decision) aggregate directly.

use serde::Deserialize;

use crate::domain::decision::DecisionStatus;
use crate::domain::foundation::Filter;

/// Query string for `GET /decisions`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListDecisionsParams {
    #[serde(default)]
    pub status: Filter<DecisionStatus>,
}
