mod config;
mod errors;
mod generation;
mod history;
mod llm_client;
mod models;
mod planner;
mod routes;
mod state;
#[cfg(test)]
mod test_utils;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::history::PlanHistory;
use crate::llm_client::OpenAiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting FitCoach API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize AI provider client
    let ai = OpenAiClient::new(
        config.openai_api_key.clone(),
        &config.openai_base_url,
        Duration::from_secs(config.ai_timeout_secs),
    )?;
    if ai.is_configured() {
        info!(
            "AI provider initialized (chat: {}, image: {})",
            llm_client::CHAT_MODEL,
            llm_client::IMAGE_MODEL
        );
    } else {
        warn!("OPENAI_API_KEY not set; AI endpoints will fall back or return 503");
    }

    let state = AppState {
        config: config.clone(),
        ai: Arc::new(ai),
        history: PlanHistory::new(),
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
