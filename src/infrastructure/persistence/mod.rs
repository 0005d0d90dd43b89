//! PostgreSQL record store implementation.
//!
//! Concrete implementation of the domain store traits using SQLx with bound
//! parameters.
//!
//! # Stores
//!
//! - [`PgClinicStore`] - Owner, pet, pet type and visit reads

pub mod pg_clinic_store;

pub use pg_clinic_store::{PgClinicStore, PgReadSession};
