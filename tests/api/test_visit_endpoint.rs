// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /visit over the full router
//!
//! Every outcome, failures included, must come back as HTTP 200 with the
//! failure encoded in the payload.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use search_gateway::api::{create_app, ApiConfig, AppState};
use search_gateway::search::content::{FetchError, MAX_CONTENT_CHARS};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

use crate::common::{gateway_with, FakeTransport, RecordingProvider};

const UNAVAILABLE: &str = "page visiting is unavailable in this deployment";

async fn post_visit(transport: Option<Arc<FakeTransport>>, url: &str) -> Value {
    let gateway = gateway_with(RecordingProvider::with_hits(0), transport);
    let app = create_app(Arc::new(AppState::new(gateway, ApiConfig::default())));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/visit")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "url": url }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn assert_failure(body: &Value, url: &str) {
    assert_eq!(body["url"], url);
    assert_eq!(body["status"], 500);
    assert_eq!(body["content"], "");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_visit_success() {
    let html = r#"
        <html>
          <head><title>Hello Page</title><script>track()</script></head>
          <body>
            <nav>Menu</nav>
            <main><h1>Welcome</h1><p>Readable body text.</p></main>
            <footer>Footer links</footer>
          </body>
        </html>
    "#;
    let transport = FakeTransport::responding(200, html);
    let body = post_visit(Some(transport.clone()), "https://example.com/hello").await;

    assert_eq!(body["url"], "https://example.com/hello");
    assert_eq!(body["status"], 200);
    assert_eq!(body["title"], "Hello Page");
    assert_eq!(body["content"], "Hello Page\nWelcome\nReadable body text.");
    assert_eq!(body["length"], 38);
    assert!(body.get("error").is_none());

    let requests = transport.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].1.name, "chrome110");
}

#[tokio::test]
async fn test_visit_truncates_long_pages() {
    let html = format!("<html><body>{}</body></html>", "x".repeat(20_000));
    let body = post_visit(Some(FakeTransport::responding(200, html)), "https://example.com/long").await;

    assert_eq!(
        body["content"].as_str().unwrap().chars().count(),
        MAX_CONTENT_CHARS
    );
    assert_eq!(body["length"], 20_000);
}

#[tokio::test]
async fn test_visit_never_returns_script_style_nav() {
    let html = r#"<html><body>
        <script>secret_script()</script>
        <style>.secret-style {}</style>
        <nav>secret-nav</nav>
        <p>visible</p>
    </body></html>"#;
    let body = post_visit(Some(FakeTransport::responding(200, html)), "https://example.com").await;

    let content = body["content"].as_str().unwrap();
    assert_eq!(content, "visible");
    assert!(!content.contains("secret"));
}

#[tokio::test]
async fn test_visit_http_404_is_payload_failure() {
    let body = post_visit(
        Some(FakeTransport::responding(404, "<html>Not Found</html>")),
        "https://example.com/missing",
    )
    .await;

    assert_failure(&body, "https://example.com/missing");
    assert_eq!(body["error"], "http status 404");
}

#[tokio::test]
async fn test_visit_transport_error_is_payload_failure() {
    let transport = FakeTransport::failing(FetchError::Transport(
        "error trying to connect: dns error".to_string(),
    ));
    let body = post_visit(Some(transport), "https://nowhere.invalid/").await;

    assert_failure(&body, "https://nowhere.invalid/");
    assert_eq!(body["error"], "error trying to connect: dns error");
}

#[tokio::test]
async fn test_visit_invalid_url_is_payload_failure() {
    let transport = FakeTransport::responding(200, "<html></html>");
    let body = post_visit(Some(transport.clone()), "not a url").await;

    assert_failure(&body, "not a url");
    assert!(body["error"].as_str().unwrap().starts_with("invalid url"));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_visit_capability_unavailable() {
    for url in ["https://example.com", "not a url", ""] {
        let body = post_visit(None, url).await;

        assert_failure(&body, url);
        assert_eq!(body["error"], UNAVAILABLE);
    }
}
