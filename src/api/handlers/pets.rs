//! Handlers for pet lookups.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::pet::PetDto;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every pet with its type and visits.
///
/// # Endpoint
///
/// `GET /api/pets`
///
/// # Errors
///
/// - `404 Not Found`: the clinic has no pets
pub async fn list_pets_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PetDto>>, AppError> {
    let pets = state.clinic_service.list_pets().await?;

    if pets.is_empty() {
        return Err(AppError::not_found("No pets found", json!({})));
    }

    Ok(Json(pets.iter().map(|g| PetDto::from(g.pet())).collect()))
}

/// Returns a pet with its type and visits.
///
/// # Endpoint
///
/// `GET /api/pets/{petId}`
///
/// The owner is loaded in full to back the pet; the response carries its id
/// as `ownerId`.
///
/// # Errors
///
/// - `404 Not Found`: no pet with this id
pub async fn get_pet_handler(
    State(state): State<AppState>,
    Path(pet_id): Path<i32>,
) -> Result<Json<PetDto>, AppError> {
    let graph = state
        .clinic_service
        .load_pet(pet_id)
        .await?
        .ok_or_else(|| AppError::not_found("Pet not found", json!({ "petId": pet_id })))?;

    Ok(Json(PetDto::from(graph.pet())))
}
