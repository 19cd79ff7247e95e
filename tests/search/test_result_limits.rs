// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Result count limits and ordering of the search adapter

use crate::common::RecordingProvider;
use search_gateway::search::{SearchQuery, SearchService, Throttle};
use std::sync::Arc;

async fn search_with(provider: &RecordingProvider, num: Option<i64>) -> Vec<String> {
    let service = SearchService::new(Box::new(provider.clone()), Arc::new(Throttle::default()));
    let query = SearchQuery::new("rust async", num).unwrap();
    service
        .search(&query)
        .await
        .unwrap()
        .items
        .into_iter()
        .map(|item| item.title)
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_requested_count_within_range() {
    for num in 1..=10 {
        let provider = RecordingProvider::with_hits(15);
        let titles = search_with(&provider, Some(num)).await;

        assert_eq!(titles.len(), num as usize);
        assert_eq!(provider.requested_limits(), vec![num as usize]);
        // Upstream order is preserved
        let expected: Vec<String> = (0..num as usize).map(|n| format!("Result {}", n)).collect();
        assert_eq!(titles, expected);
    }
}

#[tokio::test(start_paused = true)]
async fn test_requested_count_above_cap() {
    for num in [11, 25, 1000] {
        let provider = RecordingProvider::with_hits(40);
        let titles = search_with(&provider, Some(num)).await;

        assert_eq!(titles.len(), 10);
        assert_eq!(provider.requested_limits(), vec![10]);
    }
}

#[tokio::test(start_paused = true)]
async fn test_default_count_is_five() {
    let provider = RecordingProvider::with_hits(20);
    let titles = search_with(&provider, None).await;

    assert_eq!(titles.len(), 5);
    assert_eq!(provider.requested_limits(), vec![5]);
}

#[tokio::test(start_paused = true)]
async fn test_fewer_upstream_hits_than_requested() {
    let provider = RecordingProvider::with_hits(2);
    let titles = search_with(&provider, Some(8)).await;

    assert_eq!(titles, vec!["Result 0", "Result 1"]);
}

#[tokio::test(start_paused = true)]
async fn test_display_host_and_canonical_link() {
    let provider = RecordingProvider::with_hits(1);
    let service = SearchService::new(Box::new(provider), Arc::new(Throttle::default()));
    let query = SearchQuery::new("rust", Some(1)).unwrap();

    let item = service.search(&query).await.unwrap().items.remove(0);
    assert_eq!(item.display_host, "site0.example.com");
    assert_eq!(item.link, "https://site0.example.com/page?id=0");
    assert_eq!(item.canonical_link, item.link);
}
