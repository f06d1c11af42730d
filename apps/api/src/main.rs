mod chat;
mod config;
mod documents;
mod errors;
mod llm_client;
mod models;
mod retrieval;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::profile::ChatProfiles;
use crate::config::Config;
use crate::documents::DocumentStore;
use crate::llm_client::GroqClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Assistant API v{}", env!("CARGO_PKG_VERSION"));

    // Load the résumé once; it is read-only for the life of the process
    let store = match &config.cv_content_path {
        Some(path) => DocumentStore::load(path)
            .with_context(|| format!("Failed to load CV content from {}", path.display()))?,
        None => DocumentStore::bundled().context("Bundled CV content is invalid")?,
    };
    if store.is_empty() {
        warn!("Document store is empty; answers will have no CV context");
    }
    info!("Document store loaded ({} chunks)", store.len());

    // Initialize completion client
    if config.groq_api_key.is_none() {
        warn!("GROQ_API_KEY is not set; chat requests will fail with a configuration error");
    }
    let llm = GroqClient::new(config.groq_api_key.clone(), config.groq_api_url.clone())
        .context("Failed to build HTTP client")?;
    info!("Completion client initialized (endpoint: {})", config.groq_api_url);

    let profiles = ChatProfiles::default();
    info!(
        "Chat profiles: standard={}, compact={}",
        profiles.standard.model, profiles.compact.model
    );

    // Build app state
    let state = AppState {
        store: Arc::new(store),
        llm: Arc::new(llm),
        config: config.clone(),
        profiles: Arc::new(profiles),
    };

    // Build router
    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
