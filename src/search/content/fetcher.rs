//! Single-attempt page retrieval with a fixed browser disguise
//!
//! Fetches one URL, classifies the outcome and hands back the decoded body.

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

use super::config::{ContentFetchConfig, TransportKind};
use super::curl::CurlImpersonateTransport;
use super::profile::{BrowserProfile, DEFAULT_PROFILE};
use super::transport::{BrowserTransport, ReqwestTransport};

/// Upper bound on a single page retrieval
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Successful retrieval: status below 400 and a decoded body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
    /// Declared charset, or `utf-8` when none was declared
    pub encoding: String,
}

/// Content fetch error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// URL did not parse or is not http(s)
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    /// Request timed out
    #[error("request timed out after {0}s")]
    Timeout(u64),
    /// Network, TLS or DNS failure
    #[error("{0}")]
    Transport(String),
    /// Upstream answered with status >= 400
    #[error("http status {0}")]
    HttpStatus(u16),
}

/// Page fetcher bound to one transport and one browser profile
pub struct PageFetcher {
    transport: Arc<dyn BrowserTransport>,
    profile: BrowserProfile,
    timeout: Duration,
}

impl PageFetcher {
    pub fn new(transport: Arc<dyn BrowserTransport>) -> Self {
        Self {
            transport,
            profile: DEFAULT_PROFILE,
            timeout: FETCH_TIMEOUT,
        }
    }

    /// Build the fetcher a deployment is configured for
    ///
    /// `None` means page visiting is unavailable: switched off, or the
    /// configured transport cannot be started.
    pub async fn from_config(config: &ContentFetchConfig) -> Option<Self> {
        if !config.enabled {
            info!("Page visiting disabled (VISIT_ENABLED=false)");
            return None;
        }

        let transport: Arc<dyn BrowserTransport> = match config.transport {
            TransportKind::CurlImpersonate => {
                let curl = CurlImpersonateTransport::new(&config.curl_binary);
                if let Err(e) = curl.probe().await {
                    warn!("Page visiting unavailable: {}", e);
                    return None;
                }
                info!("Page transport: {}", curl.binary().display());
                Arc::new(curl)
            }
            TransportKind::Reqwest => match ReqwestTransport::new() {
                Ok(transport) => {
                    warn!("Page transport: reqwest (headers only, handshake not impersonated)");
                    Arc::new(transport)
                }
                Err(e) => {
                    warn!("Page visiting unavailable: {}", e);
                    return None;
                }
            },
        };

        Some(Self::new(transport))
    }

    /// Fetch `url` once
    ///
    /// Statuses of 400 and above are failures even though the transport
    /// succeeded. Nothing is retried.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let parsed = parse_target(url)?;

        debug!("Fetching {} (profile {})", parsed, self.profile.name);

        let page = tokio::time::timeout(
            self.timeout,
            self.transport.fetch(&parsed, &self.profile, self.timeout),
        )
        .await
        .map_err(|_| FetchError::Timeout(self.timeout.as_secs()))??;

        info!("Fetched {} with status {}", url, page.status);

        if page.status >= 400 {
            return Err(FetchError::HttpStatus(page.status));
        }

        Ok(page)
    }

    pub fn profile(&self) -> &BrowserProfile {
        &self.profile
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn parse_target(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;

    if !["http", "https"].contains(&parsed.scheme()) {
        return Err(FetchError::InvalidUrl(format!(
            "{}: unsupported scheme '{}'",
            url,
            parsed.scheme()
        )));
    }

    Ok(parsed)
}
