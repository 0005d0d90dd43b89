//! Handlers for visit lookups.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::visit::VisitDto;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every visit.
///
/// # Endpoint
///
/// `GET /api/visits`
///
/// # Errors
///
/// - `404 Not Found`: no visits recorded
pub async fn list_visits_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<VisitDto>>, AppError> {
    let visits = state.clinic_service.list_visits().await?;

    if visits.is_empty() {
        return Err(AppError::not_found("No visits found", json!({})));
    }

    Ok(Json(visits.iter().map(|g| VisitDto::from(g.visit())).collect()))
}

/// Returns a single visit.
///
/// # Endpoint
///
/// `GET /api/visits/{visitId}`
///
/// # Errors
///
/// - `404 Not Found`: no visit with this id
pub async fn get_visit_handler(
    State(state): State<AppState>,
    Path(visit_id): Path<i32>,
) -> Result<Json<VisitDto>, AppError> {
    let graph = state
        .clinic_service
        .load_visit(visit_id)
        .await?
        .ok_or_else(|| AppError::not_found("Visit not found", json!({ "visitId": visit_id })))?;

    Ok(Json(VisitDto::from(graph.visit())))
}
