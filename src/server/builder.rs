//! ServerBuilder for fluent API to build the HTTP server

use super::graphql::{BlogSchema, GraphQLExposure, Resolvers, build_schema};
use crate::config::ServerConfig;
use crate::core::{Comment, Post, Repository};
use crate::storage::{InMemoryRepository, MongoRepository};
use anyhow::Result;
use axum::{Json, Router, routing::get};
use mongodb::Database;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for the blog HTTP server
///
/// # Example
///
/// ```ignore
/// let db = blog::storage::mongodb::connect(&config.database).await?;
/// ServerBuilder::new()
///     .with_config(config)
///     .with_mongodb(db)
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: ServerConfig,
    posts: Option<Arc<dyn Repository<Post>>>,
    comments: Option<Arc<dyn Repository<Comment>>>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with the default configuration
    pub fn new() -> Self {
        Self {
            config: ServerConfig::default(),
            posts: None,
            comments: None,
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the post and comment repositories (required)
    pub fn with_repositories(
        mut self,
        posts: impl Repository<Post> + 'static,
        comments: impl Repository<Comment> + 'static,
    ) -> Self {
        self.posts = Some(Arc::new(posts));
        self.comments = Some(Arc::new(comments));
        self
    }

    /// Store both collections in the given MongoDB database
    pub fn with_mongodb(self, database: Database) -> Self {
        self.with_repositories(
            MongoRepository::<Post>::new(database.clone()),
            MongoRepository::<Comment>::new(database),
        )
    }

    /// Keep both collections in process memory
    pub fn with_in_memory_storage(self) -> Self {
        self.with_repositories(
            InMemoryRepository::<Post>::new(),
            InMemoryRepository::<Comment>::new(),
        )
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the executable GraphQL schema
    pub fn build_schema(&self) -> Result<BlogSchema> {
        let posts = self
            .posts
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Repositories are required. Call .with_repositories()"))?;
        let comments = self
            .comments
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Repositories are required. Call .with_repositories()"))?;

        Ok(build_schema(Resolvers::new(posts, comments)))
    }

    /// Build the final router
    ///
    /// This generates:
    /// - the GraphQL endpoint, console and SDL routes
    /// - `GET /health`
    ///
    /// with request tracing and permissive CORS on every route.
    pub fn build(self) -> Result<Router> {
        let schema = self.build_schema()?;

        Ok(Router::new()
            .route("/health", get(health))
            .merge(GraphQLExposure::build_router(schema, &self.config))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to the configured host and port and handles SIGTERM and SIGINT
    /// (Ctrl+C) for graceful shutdown.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.listen_addr();
        let console_url = self.config.console_url();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);
        tracing::info!("Visit {}", console_url);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
