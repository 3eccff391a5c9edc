//! GraphQL API exposure
//!
//! Routes:
//! - `POST {graphql_path}`: GraphQL queries and mutations
//! - `GET {graphiql_path}`: GraphiQL console pointed at the GraphQL endpoint
//! - `GET {graphql_path}/schema`: schema SDL as plain text

mod resolvers;
mod schema;

pub use resolvers::Resolvers;
pub use schema::{BlogSchema, CommentNode, MutationRoot, PostNode, QueryRoot, build_schema};

use crate::config::ServerConfig;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::Extension,
    response::{Html, IntoResponse},
    routing::{get, post},
};

/// GraphQL API exposure implementation
pub struct GraphQLExposure;

impl GraphQLExposure {
    /// Build the GraphQL router for `schema`
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let schema = build_schema(Resolvers::new(posts, comments));
    /// let app = GraphQLExposure::build_router(schema, &ServerConfig::default());
    /// ```
    pub fn build_router(schema: BlogSchema, config: &ServerConfig) -> Router {
        let console = GraphiQLSource::build()
            .endpoint(&config.graphql_path)
            .finish();

        Router::new()
            .route(&config.graphql_path, post(graphql_handler))
            .route(
                &config.graphiql_path,
                get(move || {
                    let console = console.clone();
                    async move { Html(console) }
                }),
            )
            .route(
                &format!("{}/schema", config.graphql_path),
                get(graphql_schema),
            )
            .layer(Extension(schema))
    }
}

/// Handler for GraphQL queries and mutations
async fn graphql_handler(
    Extension(schema): Extension<BlogSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

/// Handler for GraphQL schema SDL export
async fn graphql_schema(Extension(schema): Extension<BlogSchema>) -> impl IntoResponse {
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; charset=utf-8",
        )],
        schema.sdl(),
    )
}
