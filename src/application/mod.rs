//! Application layer services.
//!
//! Services own the per-request store session and expose the read operations
//! the transport layer calls.
//!
//! # Available Services
//!
//! - [`services::clinic_service::ClinicService`] - Owner, pet, visit and pet type reads

pub mod services;
