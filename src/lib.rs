//! # Blog GraphQL server
//!
//! A GraphQL API over two MongoDB collections, `posts` and `comments`.
//!
//! ## Features
//!
//! - **Queries**: `post(id)`, `posts`, `comment(id)`, `comments`
//! - **Mutations**: `createPost`, `createComment`, `updatePost`, `deletePost`, `deleteComment`
//! - **Relationships**: `Post.comments` and `Comment.post`, resolved on read
//! - **Storage**: MongoDB, or an in-memory backend for tests and local runs
//! - **Tooling**: GraphiQL console at `/graphiql`, SDL at `/graphql/schema`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use blog::prelude::*;
//!
//! let config = ServerConfig::default();
//! let db = blog::storage::mongodb::connect(&config.database).await?;
//!
//! ServerBuilder::new()
//!     .with_config(config)
//!     .with_mongodb(db)
//!     .serve()
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        BlogError, Comment, CommentFields, Entity, EntityId, Normalize, Post, PostFields,
        Repository,
    };

    // === Storage ===
    pub use crate::storage::{InMemoryRepository, MongoRepository};

    // === Config ===
    pub use crate::config::{DatabaseConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{
        BlogSchema, GraphQLExposure, Resolvers, ServerBuilder, build_schema, start,
    };
    pub use crate::server::graphql::{CommentNode, PostNode};

    // === External dependencies ===
    pub use async_trait::async_trait;
}
