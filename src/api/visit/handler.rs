// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Visit API endpoint handler

use axum::{extract::State, Json};
use std::sync::Arc;

use super::request::VisitApiRequest;
use crate::api::http_server::AppState;
use crate::gateway::ExtractedPage;

/// POST /visit - Fetch a page and return its readable text
///
/// Always answers 200. Failures show up in the payload as
/// `{url, status: 500, error, content: ""}`.
pub async fn visit_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<VisitApiRequest>,
) -> Json<ExtractedPage> {
    Json(state.gateway.handle_visit(&request.url).await)
}
