// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for web search functionality

use std::env;
use std::time::Duration;

use super::throttle::MIN_INTERVAL;
use super::types::{DEFAULT_NUM_RESULTS, MAX_RESULTS};

/// Configuration for web search functionality
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Minimum spacing between outbound search calls
    pub min_interval: Duration,
    /// Default number of results when the request omits `num`
    pub default_num_results: usize,
}

impl SearchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            min_interval: env::var("SEARCH_MIN_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(MIN_INTERVAL),
            default_num_results: env::var("SEARCH_DEFAULT_RESULTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_NUM_RESULTS),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_interval < MIN_INTERVAL {
            return Err(format!(
                "Search interval must be at least {}ms",
                MIN_INTERVAL.as_millis()
            ));
        }
        if self.default_num_results == 0 || self.default_num_results > MAX_RESULTS {
            return Err(format!(
                "Default result count must be between 1 and {}",
                MAX_RESULTS
            ));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_interval: MIN_INTERVAL,
            default_num_results: DEFAULT_NUM_RESULTS,
        }
    }
}
