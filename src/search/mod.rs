// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Web search and page visiting
//!
//! Key features:
//! - One process-wide throttle pacing outbound search calls
//! - Upstream hits normalized into a stable result shape
//! - Page fetches disguised as a desktop browser
//! - Boilerplate-free text extraction with a hard size cap

pub mod config;
pub mod content;
pub mod domain;
pub mod duckduckgo;
pub mod provider;
pub mod service;
pub mod throttle;
pub mod types;

// Re-export commonly used types
pub use config::SearchConfig;
pub use domain::host_of;
pub use duckduckgo::DuckDuckGoProvider;
pub use provider::SearchProvider;
pub use service::SearchService;
pub use throttle::{Clock, Throttle, TokioClock, MIN_INTERVAL};
pub use types::{RawHit, SearchError, SearchQuery, SearchResponse, SearchResult, MAX_RESULTS};

pub use content::{
    extract, ContentFetchConfig, CurlImpersonateTransport, ExtractedText, FetchError,
    FetchedPage, PageFetcher, ReqwestTransport,
};
