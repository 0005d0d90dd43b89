//! Handlers for pet types.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::pet_type::PetTypeDto;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all pet types ordered by name.
///
/// # Endpoint
///
/// `GET /api/pettypes`
pub async fn list_pet_types_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PetTypeDto>>, AppError> {
    let types = state.clinic_service.list_pet_types().await?;

    Ok(Json(types.iter().map(PetTypeDto::from).collect()))
}

/// Returns one pet type.
///
/// # Endpoint
///
/// `GET /api/pettypes/{petTypeId}`
///
/// # Errors
///
/// - `404 Not Found`: no pet type with this id
pub async fn get_pet_type_handler(
    State(state): State<AppState>,
    Path(pet_type_id): Path<i32>,
) -> Result<Json<PetTypeDto>, AppError> {
    let pet_type = state
        .clinic_service
        .get_pet_type(pet_type_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found("Pet type not found", json!({ "petTypeId": pet_type_id }))
        })?;

    Ok(Json(PetTypeDto::from(&pet_type)))
}
