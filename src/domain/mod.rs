//! Domain layer: entities, record store traits and aggregate assembly.
//!
//! # Architecture
//!
//! - [`entities`] - Owner, Pet, PetType and Visit plus their linked views
//! - [`repositories`] - Record store trait definitions and raw row types
//! - [`assembly`] - Turning rows into linked owner aggregates
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Aggregates are rebuilt per request; nothing is cached across requests

pub mod assembly;
pub mod entities;
pub mod repositories;
