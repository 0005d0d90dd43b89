//! Error types.
//!
//! - [`LoadError`] - failures of the aggregate read path, one variant per cause
//! - [`AppError`] - transport-level error rendered as a JSON HTTP response
//!
//! "Not found" is never a [`LoadError`]: loaders return `Ok(None)` instead.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;

/// The kind of child entity involved in a linking failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkedEntity {
    Pet,
    Visit,
}

impl LinkedEntity {
    fn parent(self) -> &'static str {
        match self {
            LinkedEntity::Pet => "owner",
            LinkedEntity::Visit => "pet",
        }
    }
}

impl fmt::Display for LinkedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkedEntity::Pet => f.write_str("pet"),
            LinkedEntity::Visit => f.write_str("visit"),
        }
    }
}

/// Failure while loading an owner aggregate.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The record store could not be reached or a query failed.
    #[error("record store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),

    /// A pet row points at a pet type that does not exist.
    #[error("pet {pet_id} references missing pet type {type_id}")]
    DanglingTypeReference { pet_id: i32, type_id: i32 },

    /// A child was linked to the wrong parent, or fetched with no parent to link to.
    #[error("{}", describe_mismatch(.entity, .id, .parent_id, .target_id))]
    LinkMismatch {
        entity: LinkedEntity,
        id: i32,
        parent_id: i32,
        target_id: Option<i32>,
    },
}

fn describe_mismatch(
    entity: &LinkedEntity,
    id: &i32,
    parent_id: &i32,
    target_id: &Option<i32>,
) -> String {
    let parent = entity.parent();
    match target_id {
        Some(target) => format!(
            "cannot link {entity} {id} to {parent} {target}: it belongs to {parent} {parent_id}"
        ),
        None => format!("{entity} {id} belongs to {parent} {parent_id} which was not loaded"),
    }
}

impl LoadError {
    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::StoreUnavailable(_) => "store_unavailable",
            LoadError::DanglingTypeReference { .. } => "dangling_type_reference",
            LoadError::LinkMismatch { .. } => "link_mismatch",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Unavailable { message: String, details: Value },
    DataIntegrity { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Unavailable { message, .. }
            | AppError::DataIntegrity { message, .. }
            | AppError::Internal { message, .. } => f.write_str(message),
        }
    }
}

impl From<LoadError> for AppError {
    fn from(e: LoadError) -> Self {
        match e {
            LoadError::StoreUnavailable(source) => {
                tracing::error!(error = %source, "record store unavailable");
                AppError::unavailable("Record store unavailable", json!({}))
            }
            LoadError::DanglingTypeReference { pet_id, type_id } => {
                tracing::error!(pet_id, type_id, "dangling pet type reference");
                AppError::DataIntegrity {
                    message: "Pet references a missing pet type".to_string(),
                    details: json!({ "pet_id": pet_id, "type_id": type_id }),
                }
            }
            err @ LoadError::LinkMismatch { .. } => {
                tracing::error!(error = %err, "aggregate linking failed");
                AppError::internal("Internal error", json!({}))
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Invalid request parameters",
            serde_json::to_value(&e).unwrap_or_default(),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Unavailable { message, details } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "store_unavailable",
                message,
                details,
            ),
            AppError::DataIntegrity { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "data_integrity_error",
                message,
                details,
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}
