//! Interceptor decorator for any [`UserService`].

use async_trait::async_trait;

use common::{intercept, simple_name, AppResult};
use domain::{RegistrationRequest, UserView};

use super::UserService;

/// Wraps a service so that every call is timed and logged.
///
/// Results and errors pass through unchanged.
pub struct TracedUserService<S> {
    inner: S,
    component: &'static str,
}

impl<S: UserService> TracedUserService<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            component: simple_name::<S>(),
        }
    }
}

#[async_trait]
impl<S: UserService> UserService for TracedUserService<S> {
    async fn create_user(&self, request: Option<RegistrationRequest>) -> AppResult<UserView> {
        let arguments = request.clone();
        intercept(
            self.component,
            "create_user",
            &arguments,
            self.inner.create_user(request),
        )
        .await
    }

    async fn get_user(&self, id: i64) -> AppResult<UserView> {
        intercept(self.component, "get_user", &id, self.inner.get_user(id)).await
    }
}
