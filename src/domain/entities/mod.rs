//! Core domain entities representing the clinic record model.
//!
//! Entities are plain data owned top-down: an [`Owner`] owns its [`Pet`]s and
//! each pet owns its [`Visit`]s. Back-references run the other way as plain
//! identifiers (`Pet::owner_id`, `Visit::pet_id`), so an assembled aggregate is
//! a tree rather than a cyclic graph.
//!
//! Direct back-references are materialized on demand through borrowed views:
//!
//! - [`PetRef`] - a pet reached from its owner; [`PetRef::owner`] returns that owner
//! - [`VisitRef`] - a visit reached from its pet; [`VisitRef::pet`] returns that pet
//!
//! [`PetGraph`] and [`VisitGraph`] carry a whole owner aggregate together with
//! the position of the pet (or visit) that was asked for.

pub mod owner;
pub mod pet;
pub mod pet_type;
pub mod visit;

pub use owner::{Owner, PetGraph, VisitGraph};
pub use pet::{Pet, PetRef};
pub use pet_type::PetType;
pub use visit::{Visit, VisitRef};
