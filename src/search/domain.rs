// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Display host derivation for search results

use url::Url;

/// Return the network location (host, plus port when explicit) of `url`.
///
/// Never fails: anything that does not parse to a URL with a host is
/// returned unchanged.
pub fn host_of(url: &str) -> String {
    let parsed = match Url::parse(url) {
        Ok(u) => u,
        Err(_) => return url.to_string(),
    };

    match (parsed.host_str(), parsed.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => url.to_string(),
    }
}
