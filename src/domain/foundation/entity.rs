//! Entity marker for aggregates kept in an entity store.

/// An object with a stable, opaque string identity.
///
/// Stores key their contents by [`Entity::entity_id`]; two values with the
/// same id are the same entity at different points in time.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable name of the entity kind, used in error messages.
    const KIND: &'static str;

    /// Returns the identifier this entity is stored under.
    fn entity_id(&self) -> &str;
}
