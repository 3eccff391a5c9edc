//! Repository trait for collection-level operations

use crate::core::entity::Entity;
use crate::core::error::Result;
use crate::core::id::EntityId;
use async_trait::async_trait;

/// Storage operations over a single collection of `T`
///
/// Implementations are agnostic of GraphQL. Lookups that find nothing return
/// `Ok(None)` or an empty vector; updates and deletes on unknown ids succeed
/// without doing anything. Storage failures are returned as
/// [`BlogError::StorageUnavailable`](crate::core::BlogError::StorageUnavailable)
/// and never retried.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Get a record by id
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<T>>;

    /// List every record, in no particular order
    async fn find_all(&self) -> Result<Vec<T>>;

    /// Find records whose string field `key` equals `value`
    async fn find_by_field(&self, key: &str, value: &str) -> Result<Vec<T>>;

    /// Insert a new record and return the id assigned to it
    ///
    /// Absent fields are not stored.
    async fn insert(&self, fields: T::Fields) -> Result<EntityId>;

    /// Overwrite every writable field of the record with `id`
    async fn update_by_id(&self, id: &EntityId, fields: T::Fields) -> Result<()>;

    /// Remove the record with `id`, if any
    async fn delete_by_id(&self, id: &EntityId) -> Result<()>;
}
