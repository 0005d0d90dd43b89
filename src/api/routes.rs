//! API route configuration.

use crate::api::handlers::{
    get_owner_handler, get_pet_handler, get_pet_type_handler, get_visit_handler,
    list_owners_handler, list_pet_types_handler, list_pets_handler, list_visits_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Read-only clinic routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET /owners`                - Owners by last name prefix
/// - `GET /owners/{ownerId}`      - One owner aggregate
/// - `GET /pets`                  - All pets with visits
/// - `GET /pets/{petId}`          - One pet with visits
/// - `GET /visits`                - All visits
/// - `GET /visits/{visitId}`      - One visit
/// - `GET /pettypes`              - All pet types
/// - `GET /pettypes/{petTypeId}`  - One pet type
pub fn clinic_routes() -> Router<AppState> {
    Router::new()
        .route("/owners", get(list_owners_handler))
        .route("/owners/{owner_id}", get(get_owner_handler))
        .route("/pets", get(list_pets_handler))
        .route("/pets/{pet_id}", get(get_pet_handler))
        .route("/visits", get(list_visits_handler))
        .route("/visits/{visit_id}", get(get_visit_handler))
        .route("/pettypes", get(list_pet_types_handler))
        .route("/pettypes/{pet_type_id}", get(get_pet_type_handler))
}
