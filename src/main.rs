//! Blog GraphQL server binary
//!
//! Usage: `blog-graphql [config.yaml]`. Without a file the built-in defaults
//! are used (port 8080, `mongodb://localhost:27017/blog-app`).

use blog::config::ServerConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match ServerConfig::from_yaml_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(path = %path, error = %e, "Failed to load configuration");
                return;
            }
        },
        None => ServerConfig::default(),
    };

    if let Err(e) = blog::server::start(config).await {
        tracing::error!(error = %e, "Server failed");
    }
}
