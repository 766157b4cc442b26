pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::history::handlers as history;
use crate::planner::handlers as planner;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Template planner
        .route("/api/generate-plan", post(planner::handle_generate_plan))
        .route("/api/bmi", get(planner::handle_bmi))
        // AI provider
        .route(
            "/api/generate-plan/ai",
            post(generation::handle_generate_ai_plan),
        )
        .route(
            "/api/generate-quote",
            get(generation::handle_generate_quote),
        )
        .route(
            "/api/generate-image",
            post(generation::handle_generate_image),
        )
        // Saved plans
        .route(
            "/api/plans",
            get(history::handle_list_plans).post(history::handle_save_plan),
        )
        .route(
            "/api/plans/:id",
            get(history::handle_get_plan).delete(history::handle_delete_plan),
        )
        .route("/api/plans/:id/export", get(history::handle_export_plan))
        .with_state(state)
}
