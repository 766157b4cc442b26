//! Axum route handlers for the AI-backed endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::ai_plan::{generate_ai_plan, AiFitnessPlan};
use crate::generation::images::{generate_image, ImageKind};
use crate::generation::quote::generate_quote;
use crate::models::profile::ProfileInput;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AiPlanResponse {
    pub success: bool,
    pub plan: AiFitnessPlan,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub success: bool,
    pub quote: String,
}

#[derive(Debug, Deserialize)]
pub struct ImageRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub success: bool,
    /// `null` when the provider produced nothing or failed.
    pub image_url: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-plan/ai
///
/// Same profile body as the template endpoint, answered by the AI provider.
pub async fn handle_generate_ai_plan(
    State(state): State<AppState>,
    payload: Result<Json<ProfileInput>, JsonRejection>,
) -> Result<Json<AiPlanResponse>, AppError> {
    let Json(input) = payload?;
    let profile = input.validate()?;

    let plan = generate_ai_plan(&profile, state.ai.as_ref()).await?;

    Ok(Json(AiPlanResponse {
        success: true,
        plan,
    }))
}

/// GET /api/generate-quote
pub async fn handle_generate_quote(State(state): State<AppState>) -> Json<QuoteResponse> {
    Json(QuoteResponse {
        success: true,
        quote: generate_quote(state.ai.as_ref()).await,
    })
}

/// POST /api/generate-image
pub async fn handle_generate_image(
    State(state): State<AppState>,
    payload: Result<Json<ImageRequest>, JsonRejection>,
) -> Result<Json<ImageResponse>, AppError> {
    let Json(request) = payload?;

    let name = request.name.as_deref().map(str::trim).unwrap_or_default();
    let kind = request.kind.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() || kind.is_empty() {
        return Err(AppError::Validation("Missing name or type".to_string()));
    }

    let kind = ImageKind::parse(kind).ok_or_else(|| {
        AppError::Validation("Invalid type. Must be 'exercise' or 'meal'".to_string())
    })?;

    Ok(Json(ImageResponse {
        success: true,
        image_url: generate_image(kind, name, state.ai.as_ref()).await,
    }))
}
