//! HTTP server exposing the blog schema
//!
//! [`ServerBuilder`] wires repositories into the GraphQL schema and serves it;
//! [`start`] does the same from a [`ServerConfig`], acquiring the database
//! handle once for the lifetime of the process.

pub mod builder;
pub mod graphql;

pub use builder::ServerBuilder;
pub use graphql::{BlogSchema, GraphQLExposure, Resolvers, build_schema};

use crate::config::ServerConfig;
use crate::storage::mongodb::connect;
use anyhow::Result;

/// Connect to storage and serve until shutdown.
///
/// Fails without retrying if the database cannot be reached.
pub async fn start(config: ServerConfig) -> Result<()> {
    let builder = if config.database.is_in_memory() {
        tracing::warn!("Using in-memory storage, data is lost on shutdown");
        ServerBuilder::new().with_in_memory_storage()
    } else {
        let database = connect(&config.database).await?;
        ServerBuilder::new().with_mongodb(database)
    };

    builder.with_config(config).serve().await
}
