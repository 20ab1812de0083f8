//! alertdeck - Host-Metric Alert Dashboard Client
//!
//! Fetches alert records from the alert backend, derives summary
//! metrics and chart series, and renders them to the console.

mod chart;
mod client;
mod config;
mod format;
mod metrics;
mod model;
mod render;
mod store;

use client::AlertClient;
use config::DashboardConfig;
use model::SearchCriteria;
use render::{ConsolePresenter, RenderCoordinator, RenderPhase};

use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("alertdeck=info".parse()?))
        .init();

    // Load configuration
    let cfg = DashboardConfig::load();
    tracing::info!("Using alert backend at {}", cfg.base_url);

    let client = AlertClient::new(&cfg.base_url, Duration::from_secs(cfg.timeout_secs))?;
    let mut coordinator = RenderCoordinator::new(client, ConsolePresenter::new());

    // An optional hostname argument turns the run into a search.
    match std::env::args().nth(1) {
        Some(hostname) => {
            coordinator
                .on_search_submit(SearchCriteria {
                    hostname: Some(hostname),
                    ..Default::default()
                })
                .await;
        }
        None => coordinator.on_initial_load().await,
    }

    if coordinator.phase() == RenderPhase::Error {
        std::process::exit(1);
    }

    Ok(())
}
