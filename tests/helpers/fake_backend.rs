// ABOUTME: Throwaway prediction backend bound to an ephemeral local port
// ABOUTME: Serves canned replies so the reqwest gateway can be tested end to end

use super::stub_gateway::prediction_body;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Body served by `/ordered`, with keys out of alphabetical order
pub const ORDERED_BODY: &str = r#"{"Squat":{"3rd Attempt":200.0},"Bench":{"3rd Attempt":150.0},"Deadlift":{"3rd Attempt":220.0}}"#;

/// Start the fake backend and return its base URL.
///
/// Routes:
/// - `/predict`: 200 with a full prediction
/// - `/echo`: 200 echoing the received JSON
/// - `/invalid`: 400 `{ "error": "invalid division" }`
/// - `/empty-error`: 422 `{ "error": "" }`
/// - `/no-error`: 503 `{ "detail": "down" }`
/// - `/not-json`: 200 with an HTML body
/// - `/ordered`: 200 with lift keys in competition order
pub async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/predict", post(|| async { Json(prediction_body()) }))
        .route("/echo", post(|Json(body): Json<Value>| async move { Json(body) }))
        .route(
            "/invalid",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "invalid division" })),
                )
            }),
        )
        .route(
            "/empty-error",
            post(|| async { (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "error": "" }))) }),
        )
        .route(
            "/no-error",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "detail": "down" }))) }),
        )
        .route("/not-json", post(|| async { "<html>oops</html>" }))
        .route(
            "/ordered",
            post(|| async { ([(CONTENT_TYPE, "application/json")], ORDERED_BODY) }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// URL of a local port with nothing listening
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api/model")
}
