//! HTTP transports used by the page fetcher
//!
//! A transport performs exactly one request with the given browser
//! profile and reports what came back. Deciding whether the response is
//! usable is the fetcher's job.
//!
//! Two implementations exist:
//! - [`CurlImpersonateTransport`](super::curl::CurlImpersonateTransport)
//!   drives curl-impersonate, so the TLS and HTTP/2 handshake match the
//!   profile's browser. This is the default.
//! - [`ReqwestTransport`] sends the same headers over rustls. The
//!   handshake is not disguised.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::fetcher::{FetchError, FetchedPage};
use super::profile::BrowserProfile;

/// Encoding assumed when the response does not declare one
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Most body bytes kept from one response; the rest is discarded unread
pub const MAX_BODY_BYTES: usize = 5 * 1024 * 1024;

pub(crate) const MAX_REDIRECTS: usize = 10;

/// Impersonating HTTP capability
#[async_trait]
pub trait BrowserTransport: Send + Sync {
    /// Issue a single GET for `url` presenting `profile`
    ///
    /// Any HTTP status is a successful transport outcome; only network,
    /// TLS, DNS and timeout problems are errors.
    async fn fetch(
        &self,
        url: &Url,
        profile: &BrowserProfile,
        timeout: Duration,
    ) -> Result<FetchedPage, FetchError>;
}

/// reqwest-backed transport
///
/// Sends the profile's headers in order and decodes gzip, brotli and
/// deflate bodies, matching the advertised `Accept-Encoding`.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl BrowserTransport for ReqwestTransport {
    async fn fetch(
        &self,
        url: &Url,
        profile: &BrowserProfile,
        timeout: Duration,
    ) -> Result<FetchedPage, FetchError> {
        let mut request = self
            .client
            .get(url.clone())
            .timeout(timeout)
            .header(reqwest::header::USER_AGENT, profile.user_agent);
        for (name, value) in profile.headers {
            request = request.header(*name, *value);
        }

        debug!("GET {} with headers of {} (rustls handshake)", url, profile.name);

        let mut response = request.send().await.map_err(|e| map_reqwest_error(e, timeout))?;
        let status = response.status().as_u16();
        let encoding = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(charset_of)
            .unwrap_or_else(|| DEFAULT_ENCODING.to_string());

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| map_reqwest_error(e, timeout))?
        {
            if !append_capped(&mut body, &chunk, MAX_BODY_BYTES) {
                debug!("Body of {} cut at {} bytes", url, MAX_BODY_BYTES);
                break;
            }
        }

        Ok(FetchedPage {
            status,
            body: decode_body(&body, &encoding),
            encoding,
        })
    }
}

fn map_reqwest_error(error: reqwest::Error, timeout: Duration) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout(timeout.as_secs())
    } else {
        FetchError::Transport(error.to_string())
    }
}

/// Append `chunk` to `body` without growing past `cap` bytes
///
/// Returns false once the cap is reached.
pub(crate) fn append_capped(body: &mut Vec<u8>, chunk: &[u8], cap: usize) -> bool {
    let room = cap.saturating_sub(body.len());
    if chunk.len() < room {
        body.extend_from_slice(chunk);
        return true;
    }
    body.extend_from_slice(&chunk[..room]);
    false
}

/// Decode `bytes` with the named charset, falling back to UTF-8 for labels
/// that are not recognised. Malformed sequences become U+FFFD.
pub fn decode_body(bytes: &[u8], charset: &str) -> String {
    let encoding =
        encoding_rs::Encoding::for_label(charset.as_bytes()).unwrap_or(encoding_rs::UTF_8);
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

/// Extract the `charset` parameter of a Content-Type value
pub fn charset_of(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .skip(1)
        .filter_map(|param| param.split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("charset"))
        .map(|(_, value)| value.trim().trim_matches('"').to_ascii_lowercase())
        .filter(|value| !value.is_empty())
}
