mod config;
mod errors;
mod llm_client;
mod optimizer;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::optimizer::score::RandomScore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing GEMINI_API_KEY)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Promptimizer API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the generation client once; shared read-only by every request
    let gemini = GeminiClient::from_config(&config)?;
    info!(
        "Gemini client initialized (model: {}, timeout: {:?})",
        config.gemini_model, config.generation_timeout
    );

    let scores = RandomScore::new(config.fallback_score_seed);
    if let Some(seed) = config.fallback_score_seed {
        info!("Fallback scores seeded with {seed}");
    }

    let state = AppState {
        generator: Arc::new(gemini),
        scores: Arc::new(scores),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // browser UI runs on another origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
