// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Liveness and service description routes

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use search_gateway::api::{create_app, ApiConfig, AppState};
use search_gateway::version;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

use crate::common::{gateway_with, FakeTransport, RecordingProvider};

fn app() -> axum::Router {
    app_with(None)
}

fn app_with(transport: Option<Arc<FakeTransport>>) -> axum::Router {
    let gateway = gateway_with(RecordingProvider::with_hits(0), transport);
    create_app(Arc::new(AppState::new(gateway, ApiConfig::default())))
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    get_json_from(app(), uri).await
}

async fn get_json_from(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_is_static() {
    let (status, body) = get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_root_lists_endpoints() {
    let (status, body) = get_json("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());
    assert!(body["endpoints"]["/search"].is_string());
    assert!(body["endpoints"]["/visit"].is_string());
    assert!(body["endpoints"]["/health"].is_string());
}

#[tokio::test]
async fn test_root_reports_build_and_capabilities() {
    let (_, body) = get_json("/").await;
    assert_eq!(body["version"], version::VERSION);
    assert_eq!(body["build_date"], version::BUILD_DATE);
    assert_eq!(body["search_provider"], "recording");
    assert_eq!(body["visit_available"], false);

    let app = app_with(Some(FakeTransport::responding(200, "<p>ok</p>")));
    let (_, body) = get_json_from(app, "/").await;
    assert_eq!(body["visit_available"], true);
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/search")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    let headers = response.headers();

    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:5173"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_cors_ignores_unknown_origin() {
    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "https://evil.example.com")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
