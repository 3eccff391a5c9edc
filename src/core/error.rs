//! Typed error handling for the blog server
//!
//! Repository and resolver code returns [`BlogError`] so that callers can
//! react to specific failures instead of matching on strings. Lookups that
//! find nothing are not errors: they return `Ok(None)` and surface as `null`
//! in GraphQL responses.
//!
//! # Error Categories
//!
//! - [`BlogError::MalformedIdentifier`]: a client-supplied id is not a valid object id
//! - [`BlogError::StorageUnavailable`]: the database rejected or could not serve an operation
//! - [`BlogError::Serialization`]: a stored document could not be mapped to an entity
//! - [`BlogError::Config`]: the server configuration could not be loaded
//!
//! # Example
//!
//! ```rust,ignore
//! match resolvers.post(Some("not-an-id".into())).await {
//!     Ok(Some(post)) => println!("Found: {:?}", post),
//!     Ok(None) => println!("no such post"),
//!     Err(BlogError::MalformedIdentifier { value, .. }) => println!("bad id {value}"),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use async_graphql::ErrorExtensions;
use thiserror::Error;

/// Result alias used by repositories and resolvers.
pub type Result<T> = std::result::Result<T, BlogError>;

/// The main error type of the blog server
#[derive(Debug, Error)]
pub enum BlogError {
    /// A client-supplied identifier is not a valid object id
    #[error("Malformed identifier '{value}': {message}")]
    MalformedIdentifier { value: String, message: String },

    /// The database failed to perform an operation (connectivity, bad query)
    #[error("Storage unavailable while trying to {operation} {collection}: {message}")]
    StorageUnavailable {
        collection: String,
        operation: String,
        message: String,
    },

    /// A document could not be converted to or from its entity
    #[error("Failed to serialize/deserialize {collection}: {message}")]
    Serialization { collection: String, message: String },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BlogError {
    /// Build a storage error for `operation` on `collection`.
    pub fn storage(
        collection: impl Into<String>,
        operation: impl Into<String>,
        err: impl std::fmt::Display,
    ) -> Self {
        BlogError::StorageUnavailable {
            collection: collection.into(),
            operation: operation.into(),
            message: err.to_string(),
        }
    }

    /// Build a serialization error for `collection`.
    pub fn serialization(collection: impl Into<String>, err: impl std::fmt::Display) -> Self {
        BlogError::Serialization {
            collection: collection.into(),
            message: err.to_string(),
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            BlogError::MalformedIdentifier { .. } => "MALFORMED_IDENTIFIER",
            BlogError::StorageUnavailable { .. } => "STORAGE_UNAVAILABLE",
            BlogError::Serialization { .. } => "SERIALIZATION_ERROR",
            BlogError::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl ErrorExtensions for BlogError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.error_code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, ext| ext.set("code", code))
    }
}

impl From<serde_yaml::Error> for BlogError {
    fn from(err: serde_yaml::Error) -> Self {
        BlogError::Config(err.to_string())
    }
}

impl From<std::io::Error> for BlogError {
    fn from(err: std::io::Error) -> Self {
        BlogError::Config(err.to_string())
    }
}
