//! In-memory implementation of Repository for testing and development

use crate::core::{BlogError, Entity, EntityId, Repository, Result};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

/// In-memory repository implementation
///
/// Records are kept in insertion order. Uses RwLock for thread-safe access;
/// clones share the same underlying collection.
#[derive(Clone)]
pub struct InMemoryRepository<T> {
    records: Arc<RwLock<IndexMap<EntityId, T>>>,
}

impl<T> InMemoryRepository<T> {
    /// Create a new, empty in-memory repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(IndexMap::new())),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_error<T: Entity>(operation: &str, err: impl std::fmt::Display) -> BlogError {
    BlogError::storage(
        T::resource_name(),
        operation,
        format!("Failed to acquire lock: {}", err),
    )
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<T>> {
        tracing::debug!(collection = T::resource_name(), %id, "find_by_id");
        let records = self
            .records
            .read()
            .map_err(|e| lock_error::<T>("find in", e))?;

        Ok(records.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<T>> {
        tracing::debug!(collection = T::resource_name(), "find_all");
        let records = self
            .records
            .read()
            .map_err(|e| lock_error::<T>("list", e))?;

        Ok(records.values().cloned().collect())
    }

    async fn find_by_field(&self, key: &str, value: &str) -> Result<Vec<T>> {
        tracing::debug!(collection = T::resource_name(), key, value, "find_by_field");
        let records = self
            .records
            .read()
            .map_err(|e| lock_error::<T>("search", e))?;

        Ok(records
            .values()
            .filter(|record| record.field_value(key) == Some(value))
            .cloned()
            .collect())
    }

    async fn insert(&self, fields: T::Fields) -> Result<EntityId> {
        let mut records = self
            .records
            .write()
            .map_err(|e| lock_error::<T>("insert into", e))?;

        let id = EntityId::new();
        records.insert(id, T::from_fields(id, fields));
        tracing::debug!(collection = T::resource_name(), %id, "insert");

        Ok(id)
    }

    async fn update_by_id(&self, id: &EntityId, fields: T::Fields) -> Result<()> {
        tracing::debug!(collection = T::resource_name(), %id, "update_by_id");
        let mut records = self
            .records
            .write()
            .map_err(|e| lock_error::<T>("update", e))?;

        if let Some(record) = records.get_mut(id) {
            record.overwrite(fields);
        }

        Ok(())
    }

    async fn delete_by_id(&self, id: &EntityId) -> Result<()> {
        tracing::debug!(collection = T::resource_name(), %id, "delete_by_id");
        let mut records = self
            .records
            .write()
            .map_err(|e| lock_error::<T>("delete from", e))?;

        records.shift_remove(id);

        Ok(())
    }
}
