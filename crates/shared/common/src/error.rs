//! Unified error handling for the HTTP boundary.
//!
//! `AppError` is the whole error taxonomy of the service. Its `IntoResponse`
//! implementation is the error translator: the single place where an error
//! becomes a status code and a body.

use std::collections::BTreeMap;
use std::convert::Infallible;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{DomainError, Violation, MSG_USER_NOT_FOUND};
use serde::Serialize;
use thiserror::Error;

use crate::intercept::intercept_sync;

/// Message shown to clients for anything unclassified
pub const MSG_UNEXPECTED: &str = "an unexpected error occurred";

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    /// One or more constraints failed; carries every violation
    #[error("validation failed: {}", format_violations(.0))]
    Validation(Vec<Violation>),

    #[error("{0}")]
    NotFound(String),

    /// Malformed input outside the declarative validation path
    #[error("{0}")]
    InvalidArgument(String),

    // Anything else (store failure, defect)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Error response body.
///
/// Validation failures render as a `field -> message` map, everything else
/// as `{"error": message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Fields(BTreeMap<String, String>),
    Message { error: String },
}

impl ErrorBody {
    fn message(msg: impl Into<String>) -> Self {
        ErrorBody::Message { error: msg.into() }
    }
}

impl AppError {
    /// Get error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InvalidArgument(_) => "INVALID_ARGUMENT",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Build the client-facing body and log at the matching severity.
    ///
    /// Client errors log a warning; internal details only go to the log.
    pub fn body(&self) -> ErrorBody {
        match self {
            AppError::Validation(violations) => {
                let fields = violations_by_field(violations);
                tracing::warn!(code = self.code(), violations = ?fields, "!!! Validation failed");
                ErrorBody::Fields(fields)
            }
            AppError::NotFound(msg) => {
                tracing::warn!(code = self.code(), "!!! Resource not found: {}", msg);
                ErrorBody::message(msg.clone())
            }
            AppError::InvalidArgument(msg) => {
                tracing::warn!(code = self.code(), "!!! Invalid argument: {}", msg);
                ErrorBody::message(msg.clone())
            }
            AppError::Internal(detail) => {
                tracing::error!(code = self.code(), detail = ?self, "!!! Unexpected error: {}", detail);
                ErrorBody::message(MSG_UNEXPECTED)
            }
        }
    }

    fn translate(&self) -> Result<(StatusCode, ErrorBody), Infallible> {
        Ok((self.status(), self.body()))
    }
}

/// Collapse violations into one message per field.
///
/// Several messages on the same field are joined with `"; "` in the order
/// they were reported.
pub fn violations_by_field(violations: &[Violation]) -> BTreeMap<String, String> {
    let mut fields: BTreeMap<String, String> = BTreeMap::new();
    for violation in violations {
        fields
            .entry(violation.field.clone())
            .and_modify(|existing| {
                existing.push_str("; ");
                existing.push_str(&violation.message);
            })
            .or_insert_with(|| violation.message.clone());
    }
    fields
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let translated = intercept_sync("ErrorTranslator", "into_response", &self, || {
            self.translate()
        });
        let (status, body) = match translated {
            Ok(parts) => parts,
            Err(never) => match never {},
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnknownGender(_) | DomainError::MissingField(_) => {
                AppError::InvalidArgument(err.to_string())
            }
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or_else(|| AppError::not_found(MSG_USER_NOT_FOUND))
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(violations: Vec<Violation>) -> Self {
        AppError::Validation(violations)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        AppError::InvalidArgument(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
