//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - The application error taxonomy and its HTTP translation
//! - The execution interceptor used at every boundary call
//! - Configuration structures

pub mod config;
pub mod error;
pub mod intercept;

#[cfg(test)]
mod test_support;

pub use config::*;
pub use error::{AppError, AppResult, ErrorBody, OptionExt};
pub use intercept::{intercept, intercept_sync, simple_name};
