//! GraphQL-over-HTTP client.
//!
//! Posts standard `{ query, variables }` envelopes to a running
//! bookgraph service and unwraps the `{ data, errors }` response.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Parameters accepted by the GraphQL endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub variables: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

/// Standard GraphQL response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlResponse {
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<Value>,
}

/// Errors from the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a usable HTTP response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server executed the request and reported GraphQL errors.
    #[error("graphql errors: {0}")]
    GraphQl(Value),

    /// The response carried neither data nor errors.
    #[error("response carried no data")]
    MissingData,
}

/// Remote client for the bookgraph GraphQL service.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    endpoint: String,
    http: reqwest::Client,
}

impl GraphQlClient {
    /// Creates a client for the given endpoint URL.
    pub fn new<S: Into<String>>(endpoint: S) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Executes a request and returns the `data` value.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::GraphQl`] if the server reported any
    /// errors, and [`ClientError::Transport`] on HTTP failures.
    pub async fn execute(&self, request: &GraphQlRequest) -> Result<Value, ClientError> {
        let response: GraphQlResponse = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !response.errors.is_empty() {
            return Err(ClientError::GraphQl(Value::Array(response.errors)));
        }
        response.data.ok_or(ClientError::MissingData)
    }

    /// Executes a query document with variables.
    ///
    /// # Errors
    ///
    /// See [`GraphQlClient::execute`].
    pub async fn query<S: Into<String>>(
        &self,
        query: S,
        variables: Value,
    ) -> Result<Value, ClientError> {
        self.execute(&GraphQlRequest {
            query: query.into(),
            variables,
            operation_name: None,
        })
        .await
    }
}
