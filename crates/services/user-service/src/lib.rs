//! User Service Library
//!
//! Validation, orchestration and storage for user registration.
//! The gateway embeds this crate directly.

pub mod repository;
pub mod service;
pub mod validation;

use std::sync::Arc;

use common::RegistrationConfig;

use crate::repository::{InMemoryUserStore, UserRepository};
use crate::service::{TracedUserService, UserManager, UserService};
use crate::validation::ValidationEngine;

/// Build the traced registration service over the given repository.
pub fn build_service(
    repo: Arc<dyn UserRepository>,
    config: RegistrationConfig,
) -> Arc<dyn UserService> {
    let manager = UserManager::new(repo, ValidationEngine::new(config));
    Arc::new(TracedUserService::new(manager))
}

/// Build the traced registration service backed by an in-memory store.
pub fn build_in_memory_service(config: RegistrationConfig) -> Arc<dyn UserService> {
    tracing::info!(
        country = %config.country_name,
        minimum_age = config.minimum_age,
        "Using in-memory user store"
    );
    build_service(Arc::new(InMemoryUserStore::new()), config)
}
