//! Handlers for owner aggregates.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::owner::OwnerDto;
use crate::api::dto::query::OwnersQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Lists owners whose last name starts with the given prefix.
///
/// # Endpoint
///
/// `GET /api/owners?lastName=Dav`
///
/// Without `lastName` every owner is returned. Each owner carries all of its
/// pets and visits. An empty match is `200 OK` with `[]`.
///
/// # Errors
///
/// - `400 Bad Request`: `lastName` longer than 80 characters
/// - `503 Service Unavailable`: record store unreachable
pub async fn list_owners_handler(
    State(state): State<AppState>,
    Query(query): Query<OwnersQuery>,
) -> Result<Json<Vec<OwnerDto>>, AppError> {
    query.validate()?;

    let owners = state
        .clinic_service
        .load_owners(query.last_name.as_deref())
        .await?;

    Ok(Json(owners.iter().map(OwnerDto::from).collect()))
}

/// Returns one owner with every pet and visit attached.
///
/// # Endpoint
///
/// `GET /api/owners/{ownerId}`
///
/// # Errors
///
/// - `404 Not Found`: no owner with this id
pub async fn get_owner_handler(
    State(state): State<AppState>,
    Path(owner_id): Path<i32>,
) -> Result<Json<OwnerDto>, AppError> {
    let owner = state
        .clinic_service
        .load_owner(owner_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found("Owner not found", json!({ "ownerId": owner_id }))
        })?;

    Ok(Json(OwnerDto::from(&owner)))
}
