//! Wire envelope for GraphQL-over-HTTP.

use serde::{Deserialize, Serialize};

/// Request body: `{query, variables}` as the endpoint expects.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: serde_json::Value,
}

/// Response envelope: `{data?, errors?}`.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

/// A single reported error. Servers attach more fields (locations, path);
/// only the message is part of the client contract.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_data_and_errors_independently() {
        let env: GraphQlResponse<serde_json::Value> =
            serde_json::from_str(r#"{"data": {"ok": true}}"#).unwrap();
        assert!(env.data.is_some());
        assert!(env.errors.is_none());

        let env: GraphQlResponse<serde_json::Value> = serde_json::from_str(
            r#"{"errors": [{"message": "X", "path": ["login"]}, {"message": "Y"}]}"#,
        )
        .unwrap();
        assert!(env.data.is_none());
        let errors = env.errors.unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "X");
    }
}
