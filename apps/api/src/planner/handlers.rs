//! Axum route handlers for the template planner.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::plan::FitnessPlan;
use crate::models::profile::ProfileInput;
use crate::planner::selector::{
    bmi_category, calculate_bmi, format_bmi, generate_structured_plan, BmiCategory,
};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct GeneratePlanQuery {
    /// Also store the plan in the history.
    #[serde(default)]
    pub save: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlanResponse {
    pub success: bool,
    pub plan: FitnessPlan,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_plan_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct BmiQuery {
    pub weight: f64,
    pub height: f64,
}

#[derive(Debug, Serialize)]
pub struct BmiResponse {
    pub success: bool,
    pub bmi: String,
    pub category: BmiCategory,
}

/// POST /api/generate-plan
///
/// Validates the profile and returns the template plan.
pub async fn handle_generate_plan(
    State(state): State<AppState>,
    query: Result<Query<GeneratePlanQuery>, QueryRejection>,
    payload: Result<Json<ProfileInput>, JsonRejection>,
) -> Result<Json<GeneratePlanResponse>, AppError> {
    let Query(query) = query?;
    let Json(input) = payload?;
    let profile = input.validate()?;

    let plan = generate_structured_plan(&profile);
    info!(
        "Generated template plan for {} (goal={}, diet={})",
        profile.name, profile.fitness_goal, profile.dietary_preference
    );

    let saved_plan_id = if query.save {
        Some(state.history.save(profile, plan.clone()).await.id)
    } else {
        None
    };

    Ok(Json(GeneratePlanResponse {
        success: true,
        plan,
        saved_plan_id,
    }))
}

/// GET /api/bmi?weight=<kg>&height=<cm>
pub async fn handle_bmi(
    query: Result<Query<BmiQuery>, QueryRejection>,
) -> Result<Json<BmiResponse>, AppError> {
    let Query(query) = query?;
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !valid(query.weight) || !valid(query.height) {
        return Err(AppError::Validation(
            "weight and height must be positive numbers".to_string(),
        ));
    }

    let bmi = calculate_bmi(query.weight, query.height);
    Ok(Json(BmiResponse {
        success: true,
        bmi: format_bmi(bmi),
        category: bmi_category(bmi),
    }))
}
