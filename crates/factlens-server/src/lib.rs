//! FactLens Server
//!
//! HTTP entry point for fact-checking. Exposes the fact-check endpoint used
//! by the browser extension and the CLI, and the routes backing the results
//! page.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ServerConfig;
use factlens_channel::{InMemoryResultStore, ResultChannel};
use factlens_extractor::FactChecker;
use factlens_gatekeeper::Gatekeeper;
use factlens_llm::{GeminiProvider, LlmError, PROMPT_VERSION};
use handlers::{create_router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Model provider could not be constructed
    #[error("Provider error: {0}")]
    Provider(#[from] LlmError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Install the global `fmt` subscriber, filtered by `RUST_LOG` (default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed, e.g. by a test harness
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Build the application state backed by Gemini
///
/// A missing API key is not fatal: the server starts and every fact-check
/// fails with a configuration error until a key is provided.
pub fn build_state(config: &ServerConfig) -> Result<AppState<GeminiProvider>, ServerError> {
    if !config.gemini.has_api_key() {
        warn!(
            "No Gemini API key configured; set {} or gemini.api_key. Fact-checks will fail.",
            config::API_KEY_ENV
        );
    }

    let provider = GeminiProvider::new(config.gemini.clone())?;

    Ok(AppState {
        checker: Arc::new(FactChecker::new(provider, Gatekeeper::new())),
        channel: ResultChannel::new(Arc::new(InMemoryResultStore::new())),
        public_url: config.public_url()?,
    })
}

/// Start the HTTP server
///
/// Initializes tracing, builds the provider and result channel, and serves
/// until the process is stopped.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    init_tracing();

    info!("Starting FactLens server");
    info!("Bind address: {}", config.bind_addr());
    info!("Public URL: {}", config.public_url);
    info!("Model: {} (prompt {})", config.gemini.model, PROMPT_VERSION);

    let state = build_state(&config)?;
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
