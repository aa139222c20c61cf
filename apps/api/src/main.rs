mod config;
mod errors;
mod generation;
mod intake;
mod layout;
mod llm_client;
mod packaging;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::layout::default_page_config;
use crate::llm_client::{ImageClient, LlmClient};
use crate::packaging::ProjectStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Studio API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize model clients
    let text_generator = LlmClient::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
    )?;
    info!(
        "LLM client initialized (model: {}, base: {})",
        llm_client::MODEL,
        config.openai_base_url
    );

    let image_generator = ImageClient::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
    )?;
    info!("Image client initialized (model: {})", llm_client::images::IMAGE_MODEL);

    // A4 pages, Helvetica 11pt body
    let page_config = default_page_config();
    info!(
        "PDF page config: {}x{}pt, body {}pt",
        page_config.page_width_pt, page_config.page_height_pt, page_config.body_font_size_pt
    );

    // Build app state
    let state = AppState {
        text_generator: Arc::new(text_generator),
        image_generator: Arc::new(image_generator),
        projects: ProjectStore::new(),
        page_config,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the front end has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
