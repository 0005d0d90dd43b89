//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into clinic loads and shapes the linked
//! aggregates into JSON.
//!
//! # Modules
//!
//! - [`dto`] - Response and query shapes
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Rate limiting and tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
