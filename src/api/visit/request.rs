// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Visit API request types

use serde::{Deserialize, Serialize};

/// Request body for POST /visit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitApiRequest {
    /// Page to fetch; validity is checked by the pipeline, not here
    pub url: String,
}
