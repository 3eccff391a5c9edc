//! Core module containing fundamental traits and types
//!
//! Entities, identifiers, the repository contract and the error type. Nothing
//! here knows about GraphQL or HTTP.

pub mod entity;
pub mod error;
pub mod id;
pub mod repository;

pub use entity::{Comment, CommentFields, Entity, Post, PostFields};
pub use error::{BlogError, Result};
pub use id::{EntityId, Normalize, normalize, normalize_all};
pub use repository::Repository;
