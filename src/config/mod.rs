//! Configuration loading and management
//!
//! Every value has a default, so a YAML file only needs the keys it changes.

use crate::core::Result;
use serde::{Deserialize, Serialize};

/// Connection string that selects the in-memory backend instead of MongoDB.
pub const IN_MEMORY_URI: &str = "memory";

/// Database connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// MongoDB connection string, or `"memory"`
    pub uri: String,

    /// Database name used when `uri` has no path component
    pub name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017/blog-app".to_string(),
            name: "blog-app".to_string(),
        }
    }
}

impl DatabaseConfig {
    pub fn is_in_memory(&self) -> bool {
        self.uri == IN_MEMORY_URI
    }
}

/// Complete server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Public base URL, used in the startup message
    pub base_url: String,

    /// Path of the GraphQL endpoint
    pub graphql_path: String,

    /// Path of the GraphiQL console
    pub graphiql_path: String,

    pub database: DatabaseConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            base_url: "http://localhost".to_string(),
            graphql_path: "/graphql".to_string(),
            graphiql_path: "/graphiql".to_string(),
            database: DatabaseConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Socket address to bind, e.g. "0.0.0.0:8080"
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// URL of the GraphiQL console as announced at startup
    pub fn console_url(&self) -> String {
        format!("{}:{}{}", self.base_url, self.port, self.graphiql_path)
    }
}
