// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod config;
pub mod errors;
pub mod http_server;
pub mod search;
pub mod visit;

pub use config::ApiConfig;
pub use errors::{ApiError, ErrorResponse};
pub use http_server::{create_app, start_server, AppState};
pub use search::{search_handler, SearchApiRequest};
pub use visit::{visit_handler, VisitApiRequest};
