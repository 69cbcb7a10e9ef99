//! Entity store port.
//!
//! Process-wide collections of domain entities keyed by their string id.
//! Callers only ever see `get`/`list`/`upsert`, so the in-memory adapter can
//! be swapped for real persistence without touching handlers.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Entity};

/// Repository port for any [`Entity`].
///
/// Implementations must keep insertion order: `list` returns entities in the
/// order they were first inserted, and `upsert` of an existing id replaces it
/// in place.
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Find an entity by id. Returns `None` if not found.
    async fn get(&self, id: &str) -> Result<Option<E>, DomainError>;

    /// All entities in insertion order.
    async fn list(&self) -> Result<Vec<E>, DomainError>;

    /// Replace the entity with the same id, or append it.
    ///
    /// # Errors
    ///
    /// - `StoreUnavailable` if the backing store cannot be written
    async fn upsert(&self, entity: E) -> Result<(), DomainError>;
}
