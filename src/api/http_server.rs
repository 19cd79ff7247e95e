// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::State,
    http::HeaderValue,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use super::config::ApiConfig;
use super::search::search_handler;
use super::visit::visit_handler;
use crate::gateway::Gateway;
use crate::version;

pub struct AppState {
    pub gateway: Gateway,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(gateway: Gateway, config: ApiConfig) -> Self {
        Self { gateway, config }
    }
}

/// Build the router with all routes, CORS and request tracing
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.cors_allowed_origins);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/search", post(search_handler))
        .route("/visit", post(visit_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = state.config.bind_address();
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Search gateway listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    // Credentials rule out wildcards, so methods and headers are mirrored
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

async fn root_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "message": "Search Gateway API",
        "version": version::VERSION,
        "build_date": version::BUILD_DATE,
        "search_provider": state.gateway.search_provider(),
        "visit_available": state.gateway.can_visit(),
        "endpoints": {
            "/search": "POST with {query, num}",
            "/visit": "POST with {url}",
            "/health": "GET health check",
        }
    }))
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}
