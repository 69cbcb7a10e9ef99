//! Third-party data source connections.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{Entity, IntegrationId, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationKind {
    Communication,
    Documentation,
    Payments,
    Crm,
    Support,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationStatus {
    Connected,
    Disconnected,
    Pending,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
    pub id: IntegrationId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: IntegrationKind,
    pub status: IntegrationStatus,
    pub last_sync: Option<Timestamp>,
    pub icon: String,
    /// Source-specific counters such as `messagesIndexed` or `pagesIndexed`.
    #[serde(flatten)]
    pub metrics: BTreeMap<String, u64>,
}

/// Partial update accepted by `PATCH /integrations/:id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct IntegrationPatch {
    pub status: IntegrationStatus,
}

impl Integration {
    /// Applies a status change. Connecting stamps `last_sync`, anything else clears it.
    pub fn apply(&mut self, patch: IntegrationPatch, now: Timestamp) {
        self.status = patch.status;
        self.last_sync = match patch.status {
            IntegrationStatus::Connected => Some(now),
            _ => None,
        };
    }
}

impl Entity for Integration {
    const KIND: &'static str = "Integration";

    fn entity_id(&self) -> &str {
        self.id.as_str()
    }
}
