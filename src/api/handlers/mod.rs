//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod owners;
pub mod pet_types;
pub mod pets;
pub mod visits;

pub use health::health_handler;
pub use owners::{get_owner_handler, list_owners_handler};
pub use pet_types::{get_pet_type_handler, list_pet_types_handler};
pub use pets::{get_pet_handler, list_pets_handler};
pub use visits::{get_visit_handler, list_visits_handler};
