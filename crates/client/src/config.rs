//! Endpoint configuration.

/// Dev default: the backend the dev-server proxy forwards `/graphql` to.
pub const DEFAULT_GRAPHQL_URL: &str = "http://localhost:8080/graphql";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrixConfig {
    /// The single remote query endpoint.
    pub graphql_url: String,
}

impl StrixConfig {
    pub fn new(graphql_url: impl Into<String>) -> Self {
        Self {
            graphql_url: graphql_url.into(),
        }
    }

    /// Read configuration from the environment.
    pub fn from_env() -> Self {
        let graphql_url = std::env::var("STRIX_GRAPHQL_URL").unwrap_or_else(|_| {
            tracing::warn!("STRIX_GRAPHQL_URL not set; using dev default");
            DEFAULT_GRAPHQL_URL.to_string()
        });
        Self { graphql_url }
    }
}
