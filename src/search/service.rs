// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search service orchestration
//!
//! Paces calls through the shared throttle, asks the provider for a capped
//! number of hits and maps them into the canonical result shape.

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::domain::host_of;
use super::provider::SearchProvider;
use super::throttle::Throttle;
use super::types::{RawHit, SearchError, SearchQuery, SearchResponse, SearchResult, MAX_RESULTS};

/// Search adapter over a single upstream provider
pub struct SearchService {
    provider: Box<dyn SearchProvider>,
    throttle: Arc<Throttle>,
}

impl SearchService {
    pub fn new(provider: Box<dyn SearchProvider>, throttle: Arc<Throttle>) -> Self {
        Self { provider, throttle }
    }

    /// Perform a search
    ///
    /// No retries: an upstream failure is returned as
    /// [`SearchError::Failed`] with the provider's message.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, SearchError> {
        self.throttle.acquire().await;

        let max_results = query.limit().min(MAX_RESULTS);
        debug!(
            "Searching {} for '{}' (max {})",
            self.provider.name(),
            query.text(),
            max_results
        );

        let start = Instant::now();
        let hits = self
            .provider
            .search(query.text(), max_results)
            .await
            .map_err(|message| {
                warn!("Search provider {} failed: {}", self.provider.name(), message);
                SearchError::Failed { message }
            })?;

        let items: Vec<SearchResult> = hits
            .into_iter()
            .take(max_results)
            .map(normalize_hit)
            .collect();

        info!(
            "Search complete: {} results from {} in {}ms",
            items.len(),
            self.provider.name(),
            start.elapsed().as_millis()
        );

        Ok(SearchResponse { items })
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }
}

fn normalize_hit(hit: RawHit) -> SearchResult {
    let link = hit.href.unwrap_or_default();
    SearchResult {
        title: hit.title.unwrap_or_default(),
        snippet: hit.body.unwrap_or_default(),
        display_host: host_of(&link),
        canonical_link: link.clone(),
        link,
    }
}
