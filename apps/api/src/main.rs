mod config;
mod entities;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::entities::{
    CapitalizedSpanRecognizer, EntityExtractor, KeywordCatalog, LlmPersonRecognizer,
    PersonRecognizer,
};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume extractor v{}", env!("CARGO_PKG_VERSION"));

    // Keyword catalog: built-in lists unless KEYWORDS_FILE overrides them
    let catalog = match &config.keywords_file {
        Some(path) => {
            let catalog = KeywordCatalog::from_json_file(path)?;
            info!("Loaded {} keywords from {}", catalog.keyword_count(), path.display());
            catalog
        }
        None => KeywordCatalog::default(),
    };

    let recognizer = build_person_recognizer(&config)?;
    info!("Person recognizer: {}", recognizer.backend());

    let state = AppState {
        config: config.clone(),
        extractor: Arc::new(EntityExtractor::new(&catalog, recognizer)),
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

/// LLM-backed recognition is opt-in; the capitalised-span heuristic is the default.
fn build_person_recognizer(config: &Config) -> Result<Arc<dyn PersonRecognizer>> {
    match config.llm_api_key() {
        Some(key) => {
            let llm = LlmClient::new(key.to_string())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Ok(Arc::new(LlmPersonRecognizer::new(llm)))
        }
        None => Ok(Arc::new(CapitalizedSpanRecognizer)),
    }
}
