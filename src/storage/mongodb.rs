//! MongoDB storage backend using the official MongoDB async driver.
//!
//! Provides `MongoRepository<T>`, backed by a `mongodb::Database`, and
//! [`connect`] which acquires that handle once at startup.
//!
//! # Storage model
//!
//! Each entity type gets its own collection, named after
//! `T::resource_name()` ("posts", "comments"). Documents are keyed by a native
//! `ObjectId` in `_id`, assigned by the driver on insert. Comments keep the
//! hex string of their post's id in `postId`.
//!
//! # Write semantics
//!
//! - `insert` stores only the fields that are present.
//! - `update_by_id` issues a single `$set` of every writable field, so absent
//!   values become `null` in the stored document.
//! - Neither update nor delete reports whether a document matched.

use crate::config::DatabaseConfig;
use crate::core::{BlogError, Entity, EntityId, Repository, Result};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Bson, Document, doc};
use mongodb::{Client, Database};
use serde::Serialize;
use std::marker::PhantomData;

/// Connect to the database described by `config` and check that it answers.
///
/// The database name is taken from the connection string path when there is
/// one, and from `config.name` otherwise.
pub async fn connect(config: &DatabaseConfig) -> Result<Database> {
    let client = Client::with_uri_str(&config.uri)
        .await
        .map_err(|e| BlogError::storage(&config.name, "connect to", e))?;

    let database = client
        .default_database()
        .unwrap_or_else(|| client.database(&config.name));

    database
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| BlogError::storage(database.name(), "connect to", e))?;

    tracing::info!(database = %database.name(), "Connected to MongoDB");
    Ok(database)
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// Serialize writable fields into a BSON document.
fn fields_to_document<F: Serialize>(collection: &str, fields: &F) -> Result<Document> {
    match mongodb::bson::to_bson(fields).map_err(|e| BlogError::serialization(collection, e))? {
        Bson::Document(doc) => Ok(doc),
        _ => Err(BlogError::serialization(
            collection,
            "Expected BSON document, got non-object",
        )),
    }
}

/// Drop `null` entries so that absent fields are not stored at all.
fn without_nulls(doc: Document) -> Document {
    doc.into_iter()
        .filter(|(_, value)| !matches!(value, Bson::Null))
        .collect()
}

fn id_filter(id: &EntityId) -> Document {
    doc! { "_id": id.as_object_id() }
}

// ---------------------------------------------------------------------------
// MongoRepository<T>
// ---------------------------------------------------------------------------

/// Generic repository backed by MongoDB.
///
/// Cloning is cheap: the driver's `Database` handle is reference counted and
/// all clones share the connection pool acquired by [`connect`].
///
/// # Example
///
/// ```rust,ignore
/// let db = blog::storage::mongodb::connect(&config.database).await?;
/// let posts = MongoRepository::<Post>::new(db.clone());
/// let id = posts.insert(PostFields::default()).await?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoRepository<T> {
    database: Database,
    _marker: PhantomData<T>,
}

impl<T> MongoRepository<T> {
    /// Create a new `MongoRepository` with the given database handle.
    pub fn new(database: Database) -> Self {
        Self {
            database,
            _marker: PhantomData,
        }
    }
}

impl<T: Entity> MongoRepository<T> {
    fn collection(&self) -> mongodb::Collection<Document> {
        self.database.collection(T::resource_name())
    }

    fn document_to_entity(doc: Document) -> Result<T> {
        mongodb::bson::from_document(doc)
            .map_err(|e| BlogError::serialization(T::resource_name(), e))
    }

    async fn find_many(&self, filter: Document) -> Result<Vec<T>> {
        let cursor = self
            .collection()
            .find(filter)
            .await
            .map_err(|e| BlogError::storage(T::resource_name(), "find in", e))?;

        let docs: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| BlogError::storage(T::resource_name(), "read cursor of", e))?;

        docs.into_iter().map(Self::document_to_entity).collect()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for MongoRepository<T> {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<T>> {
        tracing::debug!(collection = T::resource_name(), %id, "find_by_id");
        let doc = self
            .collection()
            .find_one(id_filter(id))
            .await
            .map_err(|e| BlogError::storage(T::resource_name(), "find in", e))?;

        doc.map(Self::document_to_entity).transpose()
    }

    async fn find_all(&self) -> Result<Vec<T>> {
        tracing::debug!(collection = T::resource_name(), "find_all");
        self.find_many(doc! {}).await
    }

    async fn find_by_field(&self, key: &str, value: &str) -> Result<Vec<T>> {
        tracing::debug!(collection = T::resource_name(), key, value, "find_by_field");
        self.find_many(doc! { key: value }).await
    }

    async fn insert(&self, fields: T::Fields) -> Result<EntityId> {
        let doc = without_nulls(fields_to_document(T::resource_name(), &fields)?);

        let result = self
            .collection()
            .insert_one(doc)
            .await
            .map_err(|e| BlogError::storage(T::resource_name(), "insert into", e))?;

        let id = result
            .inserted_id
            .as_object_id()
            .map(EntityId::from)
            .ok_or_else(|| {
                BlogError::serialization(T::resource_name(), "inserted _id is not an ObjectId")
            })?;

        tracing::debug!(collection = T::resource_name(), %id, "insert");
        Ok(id)
    }

    async fn update_by_id(&self, id: &EntityId, fields: T::Fields) -> Result<()> {
        tracing::debug!(collection = T::resource_name(), %id, "update_by_id");
        let set = fields_to_document(T::resource_name(), &fields)?;

        self.collection()
            .update_one(id_filter(id), doc! { "$set": set })
            .await
            .map_err(|e| BlogError::storage(T::resource_name(), "update", e))?;

        Ok(())
    }

    async fn delete_by_id(&self, id: &EntityId) -> Result<()> {
        tracing::debug!(collection = T::resource_name(), %id, "delete_by_id");
        self.collection()
            .delete_one(id_filter(id))
            .await
            .map_err(|e| BlogError::storage(T::resource_name(), "delete from", e))?;

        Ok(())
    }
}
