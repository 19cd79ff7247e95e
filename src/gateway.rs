// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Request composition for search and page visits
//!
//! `handle_visit` is total: every failure of the fetch/extract pipeline is
//! turned into an [`ExtractedPage::Failure`] here and nowhere else.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::search::content::{extract, FetchError, PageFetcher};
use crate::search::{SearchConfig, SearchError, SearchQuery, SearchResponse, SearchService};

/// Status reported in the payload of a failed visit
pub const VISIT_FAILURE_STATUS: u16 = 500;

/// Payload of a page visit; both arms travel with HTTP 200
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractedPage {
    Success {
        url: String,
        /// Upstream HTTP status
        status: u16,
        title: String,
        /// At most 5000 characters
        content: String,
        /// Length of the full extracted text
        length: usize,
    },
    Failure {
        url: String,
        status: u16,
        error: String,
        content: String,
    },
}

impl ExtractedPage {
    pub fn failure(url: impl Into<String>, error: impl Into<String>) -> Self {
        ExtractedPage::Failure {
            url: url.into(),
            status: VISIT_FAILURE_STATUS,
            error: error.into(),
            content: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExtractedPage::Success { .. })
    }
}

/// Why a visit produced no content
#[derive(Debug, Error)]
pub enum VisitError {
    #[error("page visiting is unavailable in this deployment")]
    CapabilityUnavailable,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Composes the search adapter and the visit pipeline
pub struct Gateway {
    search: SearchService,
    fetcher: Option<Arc<PageFetcher>>,
    config: SearchConfig,
}

impl Gateway {
    /// `fetcher` is `None` when this deployment cannot visit pages
    pub fn new(search: SearchService, fetcher: Option<Arc<PageFetcher>>, config: SearchConfig) -> Self {
        Self {
            search,
            fetcher,
            config,
        }
    }

    /// Run a search; `num` falls back to the configured default
    pub async fn handle_search(
        &self,
        text: &str,
        num: Option<i64>,
    ) -> Result<SearchResponse, SearchError> {
        let num = num.unwrap_or(self.config.default_num_results as i64);
        let query = SearchQuery::new(text, Some(num))?;

        info!("Search: '{}' (num: {})", query.text(), query.limit());
        self.search.search(&query).await
    }

    /// Visit a page; never fails at the transport level
    pub async fn handle_visit(&self, url: &str) -> ExtractedPage {
        info!("Visit: {}", url);

        match self.visit(url).await {
            Ok(page) => page,
            Err(e) => {
                warn!("Visit failed for {}: {}", url, e);
                ExtractedPage::failure(url, e.to_string())
            }
        }
    }

    async fn visit(&self, url: &str) -> Result<ExtractedPage, VisitError> {
        let fetcher = self
            .fetcher
            .as_ref()
            .ok_or(VisitError::CapabilityUnavailable)?;

        let page = fetcher.fetch(url).await?;
        let extracted = extract(&page.body);

        info!(
            "Visit complete: {} ({} chars, status {})",
            url, extracted.full_length, page.status
        );

        Ok(ExtractedPage::Success {
            url: url.to_string(),
            status: page.status,
            title: extracted.title,
            content: extracted.content,
            length: extracted.full_length,
        })
    }

    pub fn can_visit(&self) -> bool {
        self.fetcher.is_some()
    }

    pub fn search_provider(&self) -> &'static str {
        self.search.provider_name()
    }
}
