//! User service - Handles the registration use cases.
//!
//! SOLID (SRP): validates, builds, persists and projects users; storage is
//! delegated to the repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{NewUser, RegistrationRequest, UserView, MSG_BODY_REQUIRED};

use crate::repository::UserRepository;
use crate::validation::ValidationEngine;

/// Source of the reference date used by the age and past-date rules.
pub type Clock = fn() -> NaiveDate;

/// Today's date in the local time zone.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a user. `None` stands for an empty (`null`) request body.
    async fn create_user(&self, request: Option<RegistrationRequest>) -> AppResult<UserView>;

    /// Get a registered user by ID
    async fn get_user(&self, id: i64) -> AppResult<UserView>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    engine: ValidationEngine,
    clock: Clock,
}

impl UserManager {
    /// Create new user service instance with repository and validation engine
    pub fn new(repo: Arc<dyn UserRepository>, engine: ValidationEngine) -> Self {
        Self {
            repo,
            engine,
            clock: local_today,
        }
    }

    /// Replace the clock, mainly for tests pinned to a fixed date
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, request: Option<RegistrationRequest>) -> AppResult<UserView> {
        let request = request.ok_or_else(|| AppError::invalid_argument(MSG_BODY_REQUIRED))?;

        let violations = self.engine.validate(Some(&request), (self.clock)());
        if !violations.is_empty() {
            return Err(AppError::validation(violations));
        }

        let user = NewUser::from_request(request)?;
        let saved = self.repo.save(user).await?;
        tracing::info!(user_id = saved.id, "User registered");

        Ok(UserView::from(saved))
    }

    async fn get_user(&self, id: i64) -> AppResult<UserView> {
        let user = self.repo.find_by_id(id).await?.ok_or_not_found()?;
        Ok(UserView::from(user))
    }
}
