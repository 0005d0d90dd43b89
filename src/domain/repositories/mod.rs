//! Record store trait definitions for the domain layer.
//!
//! The store hands out raw rows only; turning rows into linked aggregates is
//! the job of [`crate::domain::assembly`].
//!
//! # Architecture
//!
//! - [`ClinicStore`] acquires a per-request [`ReadSession`]
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Testing
//!
//! See integration tests in `tests/repository_clinic.rs` for usage examples.

pub mod clinic_store;

pub use clinic_store::{ClinicStore, DescendantRows, OwnerRow, PetRow, ReadSession, VisitRow};

#[cfg(test)]
pub use clinic_store::{MockClinicStore, MockReadSession};
