//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that renders the API's uniform
//! `{error, details?}` JSON body and captures server faults to Sentry
//! before responding. All route handlers return `Result<T, AppError>`.
//!
//! Taxonomy:
//! - Validation / bad request -> 400, always the client's fault, with a
//!   per-field violation list where one exists
//! - Not found -> 404
//! - Everything else -> 500 with a generic message; details are logged
//!   server-side and never leaked to the caller

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

use postship_core::api::{ErrorResponse, FieldViolation};

use crate::store::StoreError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request payload violated one or more schema constraints.
    #[error("Validation error")]
    Validation(ValidationErrors),

    /// Malformed request (unreadable body, bad query string, missing param).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Referenced entity absent.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server faults to Sentry
        if matches!(self, Self::Store(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let body = match &self {
            Self::Validation(errors) => ErrorResponse {
                error: "Validation error".to_string(),
                details: Some(flatten_violations(errors)),
            },
            Self::BadRequest(message) => ErrorResponse {
                error: message.clone(),
                details: None,
            },
            Self::NotFound(message) => ErrorResponse {
                error: message.clone(),
                details: None,
            },
            Self::Store(_) | Self::Internal(_) => ErrorResponse {
                error: "Internal server error".to_string(),
                details: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Flatten nested [`ValidationErrors`] into a list of dotted-path violations.
///
/// Nested structs produce paths like `sender.zip_code`; list entries would
/// produce `items[2].field`.
#[must_use]
pub fn flatten_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    collect_violations("", errors, &mut violations);
    violations
}

fn collect_violations(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldViolation>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    out.push(FieldViolation {
                        field: path.clone(),
                        code: error.code.to_string(),
                        message: error.message.as_ref().map(ToString::to_string),
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_violations(&path, nested, out),
            ValidationErrorsKind::List(entries) => {
                for (index, nested) in entries {
                    collect_violations(&format!("{path}[{index}]"), nested, out);
                }
            }
        }
    }
}
