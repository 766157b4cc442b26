use std::sync::Arc;

use crate::config::Config;
use crate::history::PlanHistory;
use crate::llm_client::AiProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable AI provider. Default: `OpenAiClient`; tests swap in a stub.
    pub ai: Arc<dyn AiProvider>,
    /// Last 10 saved plans, shared across requests.
    pub history: PlanHistory,
}
