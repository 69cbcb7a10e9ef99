//! In-memory entity store.
//!
//! Data lives for the life of the process and is seeded at start-up.
//! Concurrent writers to the same id are last-write-wins.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, Entity};
use crate::ports::EntityStore;

#[derive(Debug)]
struct Slots<E> {
    items: Vec<E>,
    index: HashMap<String, usize>,
}

impl<E: Entity> Slots<E> {
    fn upsert(&mut self, entity: E) {
        match self.index.get(entity.entity_id()) {
            Some(&pos) => self.items[pos] = entity,
            None => {
                self.index
                    .insert(entity.entity_id().to_string(), self.items.len());
                self.items.push(entity);
            }
        }
    }
}

/// Insertion-ordered store keyed by entity id.
#[derive(Debug, Clone)]
pub struct InMemoryStore<E> {
    slots: Arc<RwLock<Slots<E>>>,
}

impl<E: Entity> InMemoryStore<E> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_entities(Vec::new())
    }

    /// Create a store pre-populated with `entities`, in order.
    pub fn with_entities(entities: Vec<E>) -> Self {
        let mut slots = Slots {
            items: Vec::with_capacity(entities.len()),
            index: HashMap::with_capacity(entities.len()),
        };
        for entity in entities {
            slots.upsert(entity);
        }
        Self {
            slots: Arc::new(RwLock::new(slots)),
        }
    }

    /// Number of stored entities.
    pub async fn len(&self) -> usize {
        self.slots.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<E: Entity> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for InMemoryStore<E> {
    async fn get(&self, id: &str) -> Result<Option<E>, DomainError> {
        let slots = self.slots.read().await;
        Ok(slots.index.get(id).map(|&pos| slots.items[pos].clone()))
    }

    async fn list(&self) -> Result<Vec<E>, DomainError> {
        Ok(self.slots.read().await.items.clone())
    }

    async fn upsert(&self, entity: E) -> Result<(), DomainError> {
        tracing::trace!(kind = E::KIND, id = entity.entity_id(), "upsert");
        self.slots.write().await.upsert(entity);
        Ok(())
    }
}
