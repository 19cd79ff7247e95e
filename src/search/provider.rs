// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search provider trait definition

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::types::RawHit;

/// Upstream search capability
///
/// Implementations return raw hits in upstream order. Any failure is
/// reported as a plain message; the caller decides how to surface it.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Perform a web search
    ///
    /// # Arguments
    /// * `query` - The search query string
    /// * `max_results` - Maximum number of hits to return
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<RawHit>, String>;

    /// Get the provider name for logging
    fn name(&self) -> &'static str;
}
