//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, storage).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Text that does not name one of the gender categories
    #[error("invalid gender: {0}")]
    UnknownGender(String),

    /// A required field reached record construction without a value
    #[error("{0} is required")]
    MissingField(&'static str),
}

impl DomainError {
    /// Create an unknown gender error
    pub fn unknown_gender(value: impl Into<String>) -> Self {
        DomainError::UnknownGender(value.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
