use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::Html,
    routing::{MethodRouter, get, post_service},
};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::{config::AppConfig, error::AppResult, graphql::CatalogSchema};

/// Serves the schema on the configured GraphQL route until ctrl-c.
///
/// `POST` executes GraphQL requests; `GET` serves the GraphiQL explorer
/// when enabled.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn serve(config: &AppConfig, schema: CatalogSchema) -> AppResult<()> {
    let path = config.graphql.path.clone();

    let route: MethodRouter = if config.graphql.enable_graphiql {
        let endpoint = path.clone();
        get(move || {
            let endpoint = endpoint.clone();
            async move { graphiql(&endpoint) }
        })
        .post_service(GraphQL::new(schema))
    } else {
        post_service(GraphQL::new(schema))
    };

    let app = Router::new().route(&path, route);

    let listener = TcpListener::bind(config.server.http_address).await?;
    info!(
        "GraphQL server started at http://{}{}",
        config.server.http_address, path
    );
    if config.graphql.enable_graphiql {
        info!("GraphiQL explorer enabled on the same route");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn graphiql(endpoint: &str) -> Html<String> {
    Html(GraphiQLSource::build().endpoint(endpoint).finish())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to install ctrl-c handler: {err}");
    }
}
