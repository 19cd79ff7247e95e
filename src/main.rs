// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Parser;
use search_gateway::{
    api::{start_server, ApiConfig, AppState},
    gateway::Gateway,
    search::{
        content::{ContentFetchConfig, PageFetcher},
        DuckDuckGoProvider, SearchConfig, SearchService, Throttle,
    },
    version,
};
use std::{env, sync::Arc};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Search gateway: normalized web search and disguised page visits
#[derive(Parser, Debug)]
#[command(name = "search-gateway")]
#[command(version = version::VERSION_NUMBER)]
struct Args {
    /// Address to bind (overrides GATEWAY_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides GATEWAY_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    info!("Starting {}", version::get_version_string());

    let mut api_config = ApiConfig::from_env();
    if let Some(host) = args.host {
        api_config.host = host;
    }
    if let Some(port) = args.port {
        api_config.port = port;
    }

    let search_config = SearchConfig::from_env();
    if let Err(e) = search_config.validate() {
        anyhow::bail!("Invalid search configuration: {}", e);
    }

    let throttle = Arc::new(Throttle::new(search_config.min_interval));
    let provider = DuckDuckGoProvider::new()?;
    let search_service = SearchService::new(Box::new(provider), throttle);
    info!(
        "Search provider: {} (min interval {}ms)",
        search_service.provider_name(),
        search_config.min_interval.as_millis()
    );

    let fetcher = PageFetcher::from_config(&ContentFetchConfig::from_env())
        .await
        .map(|fetcher| {
            info!(
                "Page visiting enabled (profile {}, timeout {}s)",
                fetcher.profile().name,
                fetcher.timeout().as_secs()
            );
            Arc::new(fetcher)
        });

    let gateway = Gateway::new(search_service, fetcher, search_config);
    let state = Arc::new(AppState::new(gateway, api_config));

    start_server(state).await
}
