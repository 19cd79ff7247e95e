//! Page visiting: impersonated fetch plus text extraction
//!
//! ## Architecture
//!
//! ```text
//! URL → PageFetcher ──(BrowserProfile)──→ BrowserTransport → FetchedPage
//!                                          (curl-impersonate | reqwest)
//!                                                               ↓
//!                                               extract() → ExtractedText
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let fetcher = PageFetcher::from_config(&ContentFetchConfig::from_env())
//!     .await
//!     .ok_or("page visiting unavailable")?;
//!
//! let page = fetcher.fetch("https://example.com").await?;
//! let text = extract(&page.body);
//! ```

pub mod config;
pub mod curl;
pub mod extractor;
pub mod fetcher;
pub mod profile;
pub mod transport;

pub use config::{ContentFetchConfig, TransportKind};
pub use curl::{CurlImpersonateTransport, DEFAULT_CURL_BINARY};
pub use extractor::{extract, ExtractedText, MAX_CONTENT_CHARS};
pub use fetcher::{FetchError, FetchedPage, PageFetcher, FETCH_TIMEOUT};
pub use profile::{BrowserProfile, CHROME_110, DEFAULT_PROFILE};
pub use transport::{BrowserTransport, ReqwestTransport, MAX_BODY_BYTES};
