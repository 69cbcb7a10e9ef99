//! GetUserHandler - Query handler for the dashboard owner's profile.

use std::sync::Arc;

use crate::domain::reporting::{ReportingError, UserProfile};
use crate::ports::EntityStore;

/// Returns the single seeded user.
pub struct GetUserHandler {
    store: Arc<dyn EntityStore<UserProfile>>,
}

impl GetUserHandler {
    pub fn new(store: Arc<dyn EntityStore<UserProfile>>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<UserProfile, ReportingError> {
        self.store
            .list()
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ReportingError::not_found("User", "current"))
    }
}
