//! Axum route handlers for the saved-plan history.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::history::SavedPlan;
use crate::models::plan::FitnessPlan;
use crate::models::profile::ProfileInput;
use crate::planner::export::{export_file_name, render_plan_text};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePlanRequest {
    pub user_data: ProfileInput,
    pub plan: FitnessPlan,
}

#[derive(Debug, Serialize)]
pub struct PlanListResponse {
    pub success: bool,
    pub plans: Vec<SavedPlan>,
}

#[derive(Debug, Serialize)]
pub struct SavedPlanResponse {
    pub success: bool,
    pub plan: SavedPlan,
}

#[derive(Debug, Serialize)]
pub struct DeletePlanResponse {
    pub success: bool,
}

/// GET /api/plans
pub async fn handle_list_plans(State(state): State<AppState>) -> Json<PlanListResponse> {
    Json(PlanListResponse {
        success: true,
        plans: state.history.list().await,
    })
}

/// POST /api/plans
pub async fn handle_save_plan(
    State(state): State<AppState>,
    payload: Result<Json<SavePlanRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SavedPlanResponse>), AppError> {
    let Json(request) = payload?;
    let profile = request.user_data.validate()?;

    let saved = state.history.save(profile, request.plan).await;
    info!("Saved plan {} for {}", saved.id, saved.user_data.name);

    Ok((
        StatusCode::CREATED,
        Json(SavedPlanResponse {
            success: true,
            plan: saved,
        }),
    ))
}

/// GET /api/plans/:id
pub async fn handle_get_plan(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<SavedPlanResponse>, AppError> {
    let Path(id) = id?;
    let plan = find_plan(&state, id).await?;
    Ok(Json(SavedPlanResponse {
        success: true,
        plan,
    }))
}

/// DELETE /api/plans/:id
pub async fn handle_delete_plan(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<DeletePlanResponse>, AppError> {
    let Path(id) = id?;
    if !state.history.delete(id).await {
        return Err(AppError::NotFound(format!("Plan {id} not found")));
    }
    info!("Deleted plan {id}");
    Ok(Json(DeletePlanResponse { success: true }))
}

/// GET /api/plans/:id/export
///
/// Plain-text download of a saved plan.
pub async fn handle_export_plan(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let saved = find_plan(&state, id).await?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_file_name(&saved.plan.overview.name)
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        render_plan_text(&saved.plan),
    ))
}

async fn find_plan(state: &AppState, id: Uuid) -> Result<SavedPlan, AppError> {
    state
        .history
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Plan {id} not found")))
}
