// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Web search API endpoint
//!
//! Provides the `/search` HTTP endpoint. The response body is
//! [`crate::search::SearchResponse`] as-is.

pub mod handler;
pub mod request;

pub use handler::search_handler;
pub use request::SearchApiRequest;
