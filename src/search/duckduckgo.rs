// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! DuckDuckGo search provider
//!
//! Implements web search using DuckDuckGo's HTML interface.
//! No API key required.

use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::provider::SearchProvider;
use super::types::RawHit;

const DDG_HTML_URL: &str = "https://html.duckduckgo.com/html/";
const DDG_TIMEOUT: Duration = Duration::from_secs(10);
const DDG_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// DuckDuckGo search provider (no API key required)
pub struct DuckDuckGoProvider {
    client: Client,
}

impl DuckDuckGoProvider {
    /// Create a new DuckDuckGo provider
    pub fn new() -> Result<Self, reqwest::Error> {
        // Use a realistic browser User-Agent to avoid being blocked
        let client = Client::builder()
            .timeout(DDG_TIMEOUT)
            .user_agent(DDG_USER_AGENT)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoProvider {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<RawHit>, String> {
        let response = self
            .client
            .post(DDG_HTML_URL)
            .form(&[("q", query)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    format!("DuckDuckGo timed out after {}ms", DDG_TIMEOUT.as_millis())
                } else {
                    e.to_string()
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("DuckDuckGo request failed with status {}", status.as_u16()));
        }

        let html = response.text().await.map_err(|e| e.to_string())?;
        let hits = parse_ddg_html(&html, max_results);
        debug!("DuckDuckGo returned {} hits for '{}'", hits.len(), query);

        Ok(hits)
    }

    fn name(&self) -> &'static str {
        "duckduckgo"
    }
}

/// Parse the DuckDuckGo HTML results page into raw hits, in page order
///
/// Sponsored blocks (`.result--ad`) are skipped.
fn parse_ddg_html(html: &str, max_results: usize) -> Vec<RawHit> {
    let document = Html::parse_document(html);
    let (Ok(result_sel), Ok(link_sel), Ok(snippet_sel)) = (
        Selector::parse("div.result"),
        Selector::parse("a.result__a"),
        Selector::parse(".result__snippet"),
    ) else {
        return Vec::new();
    };

    document
        .select(&result_sel)
        .filter(|block| !block.value().classes().any(|c| c == "result--ad"))
        .filter_map(|block| {
            let link = block.select(&link_sel).next()?;
            let href = link.value().attr("href").and_then(extract_ddg_url);
            let snippet = block.select(&snippet_sel).next().map(|s| element_text(&s));

            Some(RawHit {
                title: Some(element_text(&link)).filter(|t| !t.is_empty()),
                href,
                body: snippet,
            })
        })
        .take(max_results)
        .collect()
}

fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extract the target URL from DuckDuckGo's redirect link
fn extract_ddg_url(redirect_url: &str) -> Option<String> {
    // DDG links look like: //duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...
    let is_absolute = redirect_url.starts_with("http://") || redirect_url.starts_with("https://");
    if is_absolute && !redirect_url.contains("duckduckgo.com/l/") {
        return Some(redirect_url.to_string());
    }

    let absolute = if redirect_url.starts_with("//") {
        format!("https:{}", redirect_url)
    } else {
        redirect_url.to_string()
    };

    Url::parse(&absolute)
        .ok()?
        .query_pairs()
        .find(|(key, _)| key == "uddg")
        .map(|(_, value)| value.into_owned())
}
