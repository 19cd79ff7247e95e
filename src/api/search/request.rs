// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search API request types

use serde::{Deserialize, Serialize};

/// Request body for POST /search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchApiRequest {
    /// Search query string (required, non-empty)
    pub query: String,

    /// Number of results; clamped to 1-10, default applied when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num: Option<i64>,
}
