mod config;
mod errors;
mod linkedin;
mod llm_client;
mod locations;
mod models;
mod resumes;
mod routes;
mod sheets;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::linkedin::fetcher::{NameFetcher, ProfileFetcher};
use crate::llm_client::LlmClient;
use crate::locations::resolver::{GeminiHubResolver, HubResolver};
use crate::resumes::drive::{DriveClient, ResumeDocs};
use crate::routes::build_router;
use crate::sheets::google::GoogleSheetStore;
use crate::sheets::SheetStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jobsheet API v{}", env!("CARGO_PKG_VERSION"));

    // Spreadsheet backend
    let sheets: Arc<dyn SheetStore> = Arc::new(GoogleSheetStore::new(
        config.spreadsheet_id.clone(),
        config.google_api_token.clone(),
    ));
    info!("Sheets client initialized (spreadsheet: {})", config.spreadsheet_id);

    // LLM client and the tech-hub resolver built on it
    let llm = LlmClient::new(
        config.gemini_api_key.clone(),
        config.enhancer.gemini_api_url.clone(),
    );
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    let resolver: Arc<dyn HubResolver> = Arc::new(GeminiHubResolver::new(llm));

    // Drive/Docs client for resume copies
    let drive: Arc<dyn ResumeDocs> = Arc::new(DriveClient::new(config.google_api_token.clone()));
    info!("Drive client initialized");

    // Profile page fetcher for LinkedIn name extraction
    let fetcher: Arc<dyn NameFetcher> = Arc::new(ProfileFetcher::new());

    // Build app state
    let state = AppState {
        sheets,
        resolver,
        drive,
        fetcher,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
