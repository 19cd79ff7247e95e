// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /search over the full router

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use search_gateway::api::{create_app, ApiConfig, AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

use crate::common::{gateway_with, RecordingProvider};

async fn post_search(provider: RecordingProvider, body: &str) -> (StatusCode, Value) {
    let gateway = gateway_with(provider, None);
    let app = create_app(Arc::new(AppState::new(gateway, ApiConfig::default())));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/search")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_search_returns_canonical_shape() {
    let (status, body) = post_search(
        RecordingProvider::with_hits(3),
        r#"{"query": "rust", "num": 3}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);

    let first = &items[0];
    assert_eq!(first["title"], "Result 0");
    assert_eq!(first["link"], "https://site0.example.com/page?id=0");
    assert_eq!(first["snippet"], "Snippet 0");
    assert_eq!(first["displayLink"], "site0.example.com");
    assert_eq!(first["formattedUrl"], "https://site0.example.com/page?id=0");
    assert_eq!(items[2]["title"], "Result 2");
}

#[tokio::test]
async fn test_search_default_num() {
    let provider = RecordingProvider::with_hits(12);
    let (status, body) = post_search(provider.clone(), r#"{"query": "rust"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 5);
    assert_eq!(provider.requested_limits(), vec![5]);
}

#[tokio::test]
async fn test_search_num_above_cap() {
    let provider = RecordingProvider::with_hits(30);
    let (status, body) = post_search(provider.clone(), r#"{"query": "rust", "num": 50}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 10);
    assert_eq!(provider.requested_limits(), vec![10]);
}

#[tokio::test]
async fn test_search_num_zero_is_clamped() {
    let provider = RecordingProvider::with_hits(4);
    let (status, body) = post_search(provider.clone(), r#"{"query": "rust", "num": 0}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_search_empty_query_rejected() {
    let provider = RecordingProvider::with_hits(4);
    let (status, body) = post_search(provider.clone(), r#"{"query": "  "}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "validation_error");
    // Rejected before reaching the throttle or the provider
    assert!(provider.requested_limits().is_empty());
}

#[tokio::test]
async fn test_search_upstream_failure() {
    let (status, body) = post_search(
        RecordingProvider::failing("DuckDuckGo request failed with status 403"),
        r#"{"query": "rust"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error_type"], "search_failed");
    assert_eq!(
        body["message"],
        "Search failed: DuckDuckGo request failed with status 403"
    );
}
