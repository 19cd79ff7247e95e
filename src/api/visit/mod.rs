// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Page visit API endpoint

pub mod handler;
pub mod request;

pub use handler::visit_handler;
pub use request::VisitApiRequest;
