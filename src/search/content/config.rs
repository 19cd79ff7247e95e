//! Configuration for page visiting
//!
//! The on/off switch and the transport are configurable. Header profile,
//! timeout and content cap are constants.

use std::env;
use tracing::warn;

use super::curl::DEFAULT_CURL_BINARY;

/// Which client performs page fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// curl-impersonate: browser TLS and HTTP/2 fingerprint plus headers
    CurlImpersonate,
    /// reqwest over rustls: browser headers only
    Reqwest,
}

impl TransportKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "curl-impersonate" | "curl" => Some(TransportKind::CurlImpersonate),
            "reqwest" => Some(TransportKind::Reqwest),
            _ => None,
        }
    }
}

/// Configuration for page visiting
#[derive(Debug, Clone)]
pub struct ContentFetchConfig {
    /// Whether this deployment offers page visiting at all (default: true)
    pub enabled: bool,
    /// Transport backing the fetcher (default: curl-impersonate)
    pub transport: TransportKind,
    /// curl-impersonate binary, a name on PATH or a full path
    pub curl_binary: String,
}

impl ContentFetchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let transport = match env::var("VISIT_TRANSPORT") {
            Ok(name) => TransportKind::from_name(&name).unwrap_or_else(|| {
                warn!("Unknown VISIT_TRANSPORT '{}', using curl-impersonate", name);
                TransportKind::CurlImpersonate
            }),
            Err(_) => TransportKind::CurlImpersonate,
        };

        Self {
            enabled: env::var("VISIT_ENABLED")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),
            transport,
            curl_binary: env::var("CURL_IMPERSONATE_BIN")
                .unwrap_or_else(|_| DEFAULT_CURL_BINARY.to_string()),
        }
    }
}

impl Default for ContentFetchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            transport: TransportKind::CurlImpersonate,
            curl_binary: DEFAULT_CURL_BINARY.to_string(),
        }
    }
}
