//! Black-box tests for the gateway against a scripted GraphQL endpoint.

use axum::extract::Json;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::Router;
use serde::Deserialize;
use serde_json::{json, Value};

use strix_gateway::{Gateway, GatewayError};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(app: Router) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}/graphql", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Endpoint that echoes back whether an Authorization header was seen.
fn echo_auth_app() -> Router {
    Router::new().route(
        "/graphql",
        post(|headers: HeaderMap, Json(body): Json<Value>| async move {
            let auth = headers
                .get("authorization")
                .map(|v| v.to_str().unwrap_or_default().to_string());
            Json(json!({
                "data": {
                    "authorization": auth,
                    "query": body["query"],
                }
            }))
        }),
    )
}

#[derive(Debug, Deserialize)]
struct EchoData {
    authorization: Option<String>,
    query: String,
}

#[tokio::test]
async fn credential_becomes_bearer_header() {
    let srv = TestServer::spawn(echo_auth_app()).await;
    let gw = Gateway::new(&srv.base_url);

    let data: EchoData = gw
        .request("query { meg { id } }", json!({}), Some("jwt-123"))
        .await
        .unwrap();

    assert_eq!(data.authorization.as_deref(), Some("Bearer jwt-123"));
    assert_eq!(data.query, "query { meg { id } }");
}

#[tokio::test]
async fn absent_credential_sends_no_authorization_header() {
    let srv = TestServer::spawn(echo_auth_app()).await;
    let gw = Gateway::new(&srv.base_url);

    let data: EchoData = gw
        .request("query { meg { id } }", json!({}), None)
        .await
        .unwrap();

    assert_eq!(data.authorization, None);
}

#[tokio::test]
async fn first_error_message_wins() {
    let app = Router::new().route(
        "/graphql",
        post(|| async {
            Json(json!({
                "errors": [{"message": "X"}, {"message": "Y"}]
            }))
        }),
    );
    let srv = TestServer::spawn(app).await;
    let gw = Gateway::new(&srv.base_url);

    let err = gw
        .request::<Value>("query { boom }", json!({}), None)
        .await
        .unwrap_err();

    match err {
        GatewayError::Remote(message) => assert_eq!(message, "X"),
        other => panic!("expected remote failure, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_a_transport_failure() {
    let app = Router::new().route("/graphql", post(|| async { "<html>502</html>" }));
    let srv = TestServer::spawn(app).await;
    let gw = Gateway::new(&srv.base_url);

    let err = gw
        .request::<Value>("query { meg { id } }", json!({}), None)
        .await
        .unwrap_err();

    assert!(err.is_transport(), "expected transport failure, got {err:?}");
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_failure() {
    // Port 9 (discard) is never serving GraphQL.
    let gw = Gateway::new("http://127.0.0.1:9/graphql");

    let err = gw
        .request::<Value>("query { meg { id } }", json!({}), None)
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Transport(_)));
}

#[tokio::test]
async fn empty_envelope_is_missing_data() {
    let app = Router::new().route("/graphql", post(|| async { Json(json!({})) }));
    let srv = TestServer::spawn(app).await;
    let gw = Gateway::new(&srv.base_url);

    let err = gw
        .request::<Value>("query { meg { id } }", json!({}), None)
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::MissingData));
}

#[tokio::test]
async fn success_decodes_into_the_callers_shape() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct Data {
        organisasjoner: Vec<Org>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Org {
        id: String,
        navn: String,
        aktiv: bool,
    }

    let app = Router::new().route(
        "/graphql",
        post(|| async {
            Json(json!({
                "data": {
                    "organisasjoner": [
                        {"id": "ntnu", "navn": "NTNU", "aktiv": true},
                        {"id": "uio", "navn": "Universitetet i Oslo", "aktiv": false}
                    ]
                }
            }))
        }),
    );
    let srv = TestServer::spawn(app).await;
    let gw = Gateway::new(&srv.base_url);

    let data: Data = gw
        .request("query { organisasjoner { id navn aktiv } }", json!({}), None)
        .await
        .unwrap();

    assert_eq!(data.organisasjoner.len(), 2);
    assert_eq!(data.organisasjoner[0].id, "ntnu");
    assert!(!data.organisasjoner[1].aktiv);
}
