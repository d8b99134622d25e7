use std::{env, net::SocketAddr, path::Path, sync::OnceLock};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::AppResult;

/// Application configuration.
///
/// Contains all configuration settings for the bookgraph service,
/// including server, GraphQL, storage, and tracing settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Distribution metadata configuration
    pub distribution: DistributionConfig,
    /// Server configuration settings
    pub server: ServerConfig,
    /// GraphQL endpoint configuration
    pub graphql: GraphQlConfig,
    /// Storage configuration
    pub storage: StorageConfig,
    /// Tracing configuration
    pub tracing: TracingConfig,
}

/// Server configuration settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// HTTP server bind address
    pub http_address: SocketAddr,
}

/// GraphQL endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlConfig {
    /// HTTP path the schema is mounted on
    pub path: String,
    /// Enable the GraphiQL interactive explorer on GET requests
    pub enable_graphiql: bool,
}

/// Storage configuration.
///
/// The catalog is in-memory only; contents are lost on restart.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind")]
pub enum StorageConfig {
    /// In-memory storage
    Memory {
        /// Load the fixed startup dataset
        seed: bool,
    },
}

/// Tracing configuration.
///
/// Controls how tracing data is output from the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind")]
pub enum TracingConfig {
    /// In-memory tracing (no output)
    Memory,
    /// Standard output tracing
    Stdout,
}

/// Distribution metadata configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DistributionConfig {
    /// Distribution name
    pub name: String,
    /// Distribution version
    pub version: Option<String>,
}

const CONFIG_PATH_ENV: &str = "BOOKGRAPH_CONFIG_PATH";
const ENV_PREFIX: &str = "BOOKGRAPH";
const VERSION: &str = env!("CARGO_PKG_VERSION");

const DISTRIBUTION_VERSION_KEY: &str = "distribution.version";

impl AppConfig {
    /// Gets the global application configuration instance.
    ///
    /// Uses a static `OnceLock` to ensure the configuration is loaded only once.
    ///
    /// # Panics
    ///
    /// Will panic if the configuration cannot be loaded.
    pub fn get() -> &'static Self {
        static INSTANCE: OnceLock<AppConfig> = OnceLock::new();
        INSTANCE.get_or_init(|| Self::load().unwrap())
    }

    /// Loads configuration from files and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    ///
    /// # Panics
    ///
    /// Will panic if the config path cannot be converted to a string.
    pub fn load() -> AppResult<Self> {
        let config_path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "config".to_string());

        let mut config_builder =
            Config::builder().set_default(DISTRIBUTION_VERSION_KEY, VERSION)?;

        // Initial "default" configuration file
        let default_path = Path::new(&config_path).join("default");
        config_builder = config_builder.add_source(File::with_name(default_path.to_str().unwrap()));

        // Add in a local configuration file
        // This file shouldn't be checked in to git
        let local_path = Path::new(&config_path).join("local");
        config_builder = config_builder
            .add_source(File::with_name(local_path.to_str().unwrap()).required(false));

        // Add in settings from the environment (with a prefix of BOOKGRAPH)
        config_builder =
            config_builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

        Ok(config_builder.build()?.try_deserialize()?)
    }
}
