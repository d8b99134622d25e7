//! Bookgraph GraphQL Service
//!
//! A GraphQL service over an in-memory catalog of authors and books.
//! Provides single and list lookups and append-only mutations through
//! a single HTTP route.
//!
//! ## Features
//!
//! - Book and author catalog with referential resolution
//! - GraphiQL interactive explorer
//! - Structured logging and tracing

use tracing::info;

use bookgraph_service::{
    config::{AppConfig, StorageConfig, TracingConfig},
    create_catalog_schema,
    error::AppResult,
    server,
    tracing::tracer::Tracer,
};

#[tokio::main]
async fn main() -> AppResult<()> {
    let config = AppConfig::get();

    if matches!(config.tracing, TracingConfig::Stdout) {
        Tracer::install_stdout()?;
    }

    info!(
        "Starting {} v{}",
        config.distribution.name,
        config.distribution.version.as_ref().unwrap(),
    );

    start(config).await?;

    Ok(())
}

async fn start(config: &AppConfig) -> AppResult<()> {
    let seeded = match config.storage {
        StorageConfig::Memory { seed } => seed,
    };

    let schema = create_catalog_schema(seeded);

    server::serve(config, schema).await
}
