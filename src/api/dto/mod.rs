//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are the only types that meet serde; entities never serialize
//! themselves. Field names follow the camelCase wire format of the clinic API.

pub mod health;
pub mod owner;
pub mod pet;
pub mod pet_type;
pub mod query;
pub mod visit;
