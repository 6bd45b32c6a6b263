mod config;
mod errors;
mod llm_client;
mod meals;
mod models;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::OpenAiClient;
use crate::meals::catalog::default_catalog;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SOMA meal ideas API v{}", env!("CARGO_PKG_VERSION"));
    config.warn_if_unauthenticated();

    // Initialize LLM client
    let llm = OpenAiClient::new(
        config.openai_api_key.clone(),
        &config.openai_base_url,
        Duration::from_secs(config.openai_timeout_secs),
    )
    .context("Failed to build HTTP client")?;
    info!(
        "LLM client initialized (model: {}, base url: {})",
        llm_client::MODEL,
        config.openai_base_url
    );

    let catalog = default_catalog();
    info!(
        "Ingredient catalog loaded: {} categories, {} items",
        catalog.categories.len(),
        catalog.categories.iter().map(|c| c.items.len()).sum::<usize>()
    );

    match config.concurrency_limit {
        Some(limit) => info!("Concurrency limit: {limit} in-flight requests"),
        None => info!("Concurrency limit: unbounded"),
    }

    let state = AppState {
        llm: Arc::new(llm),
        catalog: Arc::new(catalog),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
