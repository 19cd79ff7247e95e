// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search API endpoint handler

use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::warn;

use super::request::SearchApiRequest;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::search::SearchResponse;

/// POST /search - Perform web search
///
/// # Request
/// - `query`: Search query string (required)
/// - `num`: Number of results (clamped to 1-10, default 5)
///
/// # Response
/// - `items`: Array of `{title, link, snippet, displayLink, formattedUrl}`
///
/// # Errors
/// - 400 Bad Request: Empty query
/// - 500 Internal Server Error: Upstream search failed
pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchApiRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let response = state
        .gateway
        .handle_search(&request.query, request.num)
        .await
        .map_err(|e| {
            warn!("Search request failed: {}", e);
            ApiError::from(e)
        })?;

    Ok(Json(response))
}
