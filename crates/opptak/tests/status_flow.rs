//! Status changes end to end: local transition check, then the mutation.

use axum::extract::Json;
use axum::routing::post;
use axum::Router;
use serde_json::{json, Value};

use strix_core::OpptakId;
use strix_gateway::{Gateway, OperationError};
use strix_opptak::{endre_opptak_status, EndreOpptaksStatusInput, OpptaksStatus};

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

#[tokio::test]
async fn legal_transition_reaches_the_server() {
    let app = Router::new().route(
        "/graphql",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["variables"]["input"]["nyStatus"], "APENT");
            Json(json!({
                "data": {
                    "endreOpptakStatus": {"id": "uhg-host-2025", "status": "APENT"}
                }
            }))
        }),
    );
    let srv = TestServer::spawn(app).await;
    let gateway = Gateway::new(&srv.base_url);

    let input = EndreOpptaksStatusInput::new(OpptakId::new("uhg-host-2025"), OpptaksStatus::Apent);
    let echo = endre_opptak_status(&gateway, OpptaksStatus::Fremtidig, &input, Some("jwt"))
        .await
        .unwrap();

    assert_eq!(echo.status, OpptaksStatus::Apent);
}

#[tokio::test]
async fn illegal_transition_never_reaches_the_server() {
    // Unreachable endpoint: the local invariant check must fire first.
    let gateway = Gateway::new("http://127.0.0.1:9/graphql");

    let input =
        EndreOpptaksStatusInput::new(OpptakId::new("uhg-host-2025"), OpptaksStatus::Avsluttet);
    let err = endre_opptak_status(&gateway, OpptaksStatus::Fremtidig, &input, Some("jwt"))
        .await
        .unwrap_err();

    assert!(matches!(err, OperationError::Domain(_)));
}
