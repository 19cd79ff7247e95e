// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for web search functionality

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of results when the caller does not ask for a count
pub const DEFAULT_NUM_RESULTS: usize = 5;

/// Hard cap on results per search, independent of what the caller requested
pub const MAX_RESULTS: usize = 10;

/// A validated search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    limit: usize,
}

impl SearchQuery {
    /// Build a query from raw request fields
    ///
    /// `num` defaults to [`DEFAULT_NUM_RESULTS`] and is clamped to
    /// `1..=MAX_RESULTS`. Empty or whitespace-only text is rejected.
    pub fn new(text: impl Into<String>, num: Option<i64>) -> Result<Self, SearchError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(SearchError::InvalidQuery {
                reason: "Query cannot be empty".to_string(),
            });
        }

        let limit = match num {
            Some(n) => n.clamp(1, MAX_RESULTS as i64) as usize,
            None => DEFAULT_NUM_RESULTS,
        };

        Ok(Self { text, limit })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

/// A hit as returned by an upstream provider, before normalization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawHit {
    pub title: Option<String>,
    pub href: Option<String>,
    pub body: Option<String>,
}

/// A single normalized search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Title of the result
    pub title: String,
    /// Target URL as reported upstream
    pub link: String,
    /// Snippet/description of the result
    pub snippet: String,
    /// Host derived from `link`
    #[serde(rename = "displayLink")]
    pub display_host: String,
    /// Currently identical to `link`
    #[serde(rename = "formattedUrl")]
    pub canonical_link: String,
}

/// Ordered search results, in upstream order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<SearchResult>,
}

/// Errors that can occur during search operations
#[derive(Debug, Error)]
pub enum SearchError {
    /// Invalid search query
    #[error("Invalid query: {reason}")]
    InvalidQuery {
        /// Reason the query is invalid
        reason: String,
    },

    /// The upstream provider raised; carries its message verbatim
    #[error("{message}")]
    Failed {
        /// Original upstream message
        message: String,
    },
}
