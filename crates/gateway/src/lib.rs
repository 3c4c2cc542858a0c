//! `strix-gateway` — uniform transport for all remote operations.
//!
//! Every view-facing operation goes through [`Gateway::request`]: one POST to
//! one fixed GraphQL endpoint, bearer credential attached only when present,
//! and exactly two failure shapes for the UI to render (transport vs remote).
//! No retry, no timeout, no caching: the surrounding UI re-issues requests on
//! user action, so every call is a fresh one-shot exchange.

pub mod error;
pub mod wire;

pub use error::{GatewayError, OperationError};
pub use wire::{GraphQlError, GraphQlResponse};

use serde::de::DeserializeOwned;

use crate::wire::GraphQlRequest;

/// Handle to the single remote query endpoint.
///
/// Cheap to clone; the underlying `reqwest::Client` pools connections.
#[derive(Debug, Clone)]
pub struct Gateway {
    http: reqwest::Client,
    endpoint: String,
}

impl Gateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue one GraphQL operation and decode the `data` payload as `T`.
    ///
    /// - `credential`: attached as `Authorization: Bearer <token>` when
    ///   present; an absent credential sends no Authorization header at all.
    /// - A send failure or a non-JSON body is a [`GatewayError::Transport`].
    /// - A non-empty `errors` list is a [`GatewayError::Remote`] carrying the
    ///   first message; the remaining messages are logged, not swallowed.
    /// - On success the caller gets `data` decoded into its expected shape;
    ///   deeper shape validation stays with the caller.
    pub async fn request<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
        credential: Option<&str>,
    ) -> Result<T, GatewayError> {
        let body = GraphQlRequest { query, variables };

        let mut req = self.http.post(&self.endpoint).json(&body);
        if let Some(token) = credential {
            req = req.bearer_auth(token);
        }

        let response = req.send().await.map_err(GatewayError::Transport)?;

        let envelope: GraphQlResponse<T> =
            response.json().await.map_err(GatewayError::Transport)?;

        if let Some(errors) = envelope.errors {
            if let Some(first) = errors.first() {
                for later in &errors[1..] {
                    tracing::warn!(message = %later.message, "additional graphql error");
                }
                return Err(GatewayError::Remote(first.message.clone()));
            }
        }

        envelope.data.ok_or(GatewayError::MissingData)
    }
}
