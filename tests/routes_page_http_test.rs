// ABOUTME: HTTP integration tests for the server-rendered prediction page
// ABOUTME: Drives sessions, form posts, submissions, and the reveal action through the router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use attempt_predictor::config::environment::ServerConfig;
use attempt_predictor::gateway::{ModelGateway, ProxyReply};
use attempt_predictor::resources::ServerResources;
use attempt_predictor::routes::build_router;
use axum::http::StatusCode;
use axum::Router;
use helpers::axum_test::AxumTestRequest;
use helpers::stub_gateway::{BlockingGateway, StubGateway};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

fn app_with(gateway: Arc<dyn ModelGateway>) -> Router {
    let resources = ServerResources::new(ServerConfig::default(), gateway).unwrap();
    build_router(&Arc::new(resources))
}

fn page_app(gateway: &Arc<StubGateway>) -> Router {
    app_with(gateway.clone())
}

/// Open a session and return its cookie
async fn open_session(app: &Router) -> String {
    let response = AxumTestRequest::get("/").send(app.clone()).await;
    assert_eq!(response.status(), 200);
    response.session_cookie().expect("new session sets a cookie")
}

async fn post_form(app: &Router, cookie: &str, fields: &[(&str, &str)]) {
    let response = AxumTestRequest::post("/")
        .cookie(cookie)
        .form(fields)
        .send(app.clone())
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location").as_deref(), Some("/"));
    assert!(response.session_cookie().is_none());
}

async fn show(app: &Router, cookie: &str) -> String {
    AxumTestRequest::get("/")
        .cookie(cookie)
        .send(app.clone())
        .await
        .assert_status(StatusCode::OK)
        .text()
}

/// Show the page once the spawned submission has settled
async fn show_settled(app: &Router, cookie: &str) -> String {
    for _ in 0..200 {
        let html = show(app, cookie).await;
        if !html.contains(r#"aria-busy="true""#) {
            return html;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("submission never settled");
}

// ============================================================================
// Sessions
// ============================================================================

#[tokio::test]
async fn test_first_visit_sets_session_cookie() {
    let app = page_app(&Arc::new(StubGateway::success()));

    let response = AxumTestRequest::get("/").send(app).await;

    assert_eq!(response.status(), 200);
    let set_cookie = response.header("set-cookie").unwrap();
    assert!(set_cookie.starts_with("predictor_session="));
    assert!(set_cookie.contains("HttpOnly"));
    let html = response.text();
    assert!(html.contains("ML Powerlifting Attempt Predictor"));
    assert!(html.contains(r#"name="bodyweight" required disabled"#));
}

#[tokio::test]
async fn test_unknown_session_cookie_gets_fresh_session() {
    let app = page_app(&Arc::new(StubGateway::success()));
    let stale = format!("predictor_session={}", Uuid::new_v4());

    let response = AxumTestRequest::get("/").cookie(&stale).send(app).await;

    let fresh = response.session_cookie().unwrap();
    assert_ne!(fresh, stale);
}

#[tokio::test]
async fn test_known_session_keeps_selections() {
    let app = page_app(&Arc::new(StubGateway::success()));
    let cookie = open_session(&app).await;

    post_form(&app, &cookie, &[("division", "Teen"), ("sex", "0"), ("action", "update")]).await;

    let html = show(&app, &cookie).await;
    assert!(html.contains(r#"<option value="Teen" selected>Teen</option>"#));
    assert!(html.contains(r#"<option value="84+">84+ kg</option>"#));
    assert!(!html.contains(r#"name="bodyweight" required disabled"#));
}

// ============================================================================
// Submission flow
// ============================================================================

#[tokio::test]
async fn test_predict_renders_recommendations_and_gates_charts() {
    let gateway = Arc::new(StubGateway::success());
    let app = page_app(&gateway);
    let cookie = open_session(&app).await;

    post_form(&app, &cookie, &[("division", "Open"), ("sex", "1"), ("action", "update")]).await;
    post_form(
        &app,
        &cookie,
        &[("division", "Open"), ("sex", "1"), ("bodyweight", "120+"), ("action", "predict")],
    )
    .await;

    let html = show_settled(&app, &cookie).await;
    assert_eq!(gateway.calls(), 1);
    assert_eq!(
        gateway.bodies()[0],
        json!({ "division": "Open", "bodyweight": 120.0, "sex": 1 })
    );
    assert!(html.contains("Estimated Total: 570.0 kg"));
    assert!(html.contains("<h3>Squat</h3>"));
    assert!(html.contains("2nd Attempt:</strong> 142.5 kg"));
    assert!(html.contains("View Visual Data"));
    assert!(!html.contains("data:image/png;base64,"));

    let response = AxumTestRequest::post("/reveal")
        .cookie(&cookie)
        .send(app.clone())
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);

    let html = show(&app, &cookie).await;
    assert!(html.contains(r#"<img src="data:image/png;base64,Qk9Y" alt="Box Plot">"#));
    assert!(html.contains(r#"alt="Attempt Progression Heatmap""#));
    assert!(html.contains(r#"alt="Lift Contributions Stacked Bar""#));
    assert!(!html.contains("View Visual Data"));
}

#[tokio::test]
async fn test_backend_error_is_shown_without_results() {
    let gateway = Arc::new(StubGateway::replying(ProxyReply::failure(
        StatusCode::BAD_REQUEST,
        json!("invalid division"),
    )));
    let app = page_app(&gateway);
    let cookie = open_session(&app).await;

    post_form(&app, &cookie, &[("division", "Youth"), ("sex", "0"), ("action", "update")]).await;
    post_form(
        &app,
        &cookie,
        &[("division", "Youth"), ("sex", "0"), ("bodyweight", "43"), ("action", "predict")],
    )
    .await;

    let html = show_settled(&app, &cookie).await;
    assert_eq!(gateway.calls(), 1);
    assert!(html.contains(r#"<p class="error">invalid division</p>"#));
    assert!(!html.contains("Estimated Total"));
    assert!(!html.contains("View Visual Data"));
}

#[tokio::test]
async fn test_submitter_sees_busy_page_while_backend_works() {
    let gateway = Arc::new(BlockingGateway::new());
    let app = app_with(gateway.clone());
    let cookie = open_session(&app).await;
    let predict = [("division", "Open"), ("sex", "1"), ("bodyweight", "93"), ("action", "predict")];

    post_form(&app, &cookie, &[("division", "Open"), ("sex", "1"), ("action", "update")]).await;
    // Redirects while the backend is still holding the request
    post_form(&app, &cookie, &predict).await;
    gateway.wait_started().await;

    let html = show(&app, &cookie).await;
    assert!(html.contains(r#"disabled aria-busy="true""#));
    assert!(html.contains(r#"<meta http-equiv="refresh" content="1">"#));
    assert!(!html.contains("Estimated Total"));

    post_form(&app, &cookie, &predict).await;

    gateway.release();
    let html = show_settled(&app, &cookie).await;
    assert!(html.contains("Estimated Total: 570.0 kg"));
    assert_eq!(gateway.calls(), 1);
}

#[tokio::test]
async fn test_reveal_without_results_shows_nothing() {
    let app = page_app(&Arc::new(StubGateway::success()));
    let cookie = open_session(&app).await;

    let response = AxumTestRequest::post("/reveal")
        .cookie(&cookie)
        .send(app.clone())
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);

    let html = show(&app, &cookie).await;
    assert!(!html.contains("Visualizations"));
}

// ============================================================================
// Local validation
// ============================================================================

#[tokio::test]
async fn test_sex_change_discards_posted_bodyweight_and_blocks_submit() {
    let gateway = Arc::new(StubGateway::success());
    let app = page_app(&gateway);
    let cookie = open_session(&app).await;

    // Sex arrives together with a bodyweight picked from no list at all
    post_form(
        &app,
        &cookie,
        &[("division", "Open"), ("sex", "1"), ("bodyweight", "93"), ("action", "predict")],
    )
    .await;

    assert_eq!(gateway.calls(), 0);
    let html = show(&app, &cookie).await;
    assert!(html.contains("Please select valid values for Bodyweight and Sex."));
}

#[tokio::test]
async fn test_missing_division_blocks_submit() {
    let gateway = Arc::new(StubGateway::success());
    let app = page_app(&gateway);
    let cookie = open_session(&app).await;

    post_form(&app, &cookie, &[("sex", "1"), ("action", "update")]).await;
    post_form(
        &app,
        &cookie,
        &[("division", ""), ("sex", "1"), ("bodyweight", "93"), ("action", "predict")],
    )
    .await;

    assert_eq!(gateway.calls(), 0);
    let html = show(&app, &cookie).await;
    assert!(html.contains("Please select a division."));
}

#[tokio::test]
async fn test_invalid_sex_is_reported() {
    let gateway = Arc::new(StubGateway::success());
    let app = page_app(&gateway);
    let cookie = open_session(&app).await;

    post_form(&app, &cookie, &[("division", "Open"), ("sex", "2"), ("action", "predict")]).await;

    assert_eq!(gateway.calls(), 0);
    let html = show(&app, &cookie).await;
    assert!(html.contains("Sex must be F (0) or M (1)."));
}
