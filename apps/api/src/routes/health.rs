use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service version, whether AI is wired up, and how many plans are saved.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "fitcoach-api",
        "ai_enabled": state.config.ai_enabled(),
        "saved_plans": state.history.len().await
    }))
}
