// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod gateway;
pub mod search;
pub mod version;

pub use api::{create_app, ApiConfig, AppState};
pub use gateway::{ExtractedPage, Gateway, VisitError};
pub use search::{SearchConfig, SearchService, Throttle};
