//! Identifier normalization between storage and transport
//!
//! Documents are keyed by a MongoDB `ObjectId`. Clients only ever see the
//! 24-character hex form, so every record leaving the resolvers goes through
//! [`Normalize`], and every id coming in from a client goes through
//! [`EntityId::parse`].

use crate::core::error::{BlogError, Result};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage-side identifier of a post or comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(ObjectId);

impl EntityId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Parse a client-supplied identifier.
    ///
    /// Fails with [`BlogError::MalformedIdentifier`] unless `value` is a
    /// 24-character hex string.
    pub fn parse(value: &str) -> Result<Self> {
        ObjectId::parse_str(value)
            .map(Self)
            .map_err(|e| BlogError::MalformedIdentifier {
                value: value.to_string(),
                message: e.to_string(),
            })
    }

    /// Parse an optional identifier argument.
    ///
    /// A missing argument can never match a stored record, so it maps to
    /// `Ok(None)` just like an unknown id.
    pub fn parse_opt(value: Option<&str>) -> Result<Option<Self>> {
        value.map(Self::parse).transpose()
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectId> for EntityId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

/// Conversion of a stored record into its transport form, in which the
/// identifier is a plain string.
pub trait Normalize {
    type Output;

    fn normalize(self) -> Self::Output;
}

/// Normalize an optional record. Absent stays absent.
pub fn normalize<T: Normalize>(record: Option<T>) -> Option<T::Output> {
    record.map(Normalize::normalize)
}

/// Normalize a sequence of records, preserving order.
pub fn normalize_all<T: Normalize>(records: Vec<T>) -> Vec<T::Output> {
    records.into_iter().map(Normalize::normalize).collect()
}
