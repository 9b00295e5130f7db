//! User repository: the store that owns persisted records.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::{AppError, AppResult};
use domain::{NewUser, UserRecord};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// `save` assigns a unique identifier that never changes afterwards.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return it with its identifier
    async fn save(&self, user: NewUser) -> AppResult<UserRecord>;

    /// Find a user by identifier
    async fn find_by_id(&self, id: i64) -> AppResult<Option<UserRecord>>;
}

#[derive(Debug)]
struct StoreState {
    next_id: i64,
    users: HashMap<i64, UserRecord>,
}

/// In-memory implementation of UserRepository.
///
/// Identifiers start at 1 and increase by one. Assignment and insertion
/// happen under the same write lock.
#[derive(Debug)]
pub struct InMemoryUserStore {
    state: RwLock<StoreState>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                next_id: 1,
                users: HashMap::new(),
            }),
        }
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.state.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn save(&self, user: NewUser) -> AppResult<UserRecord> {
        let mut state = self.state.write().await;

        let id = state.next_id;
        state.next_id = id
            .checked_add(1)
            .ok_or_else(|| AppError::internal("user identifier sequence exhausted"))?;

        let record = user.with_id(id);
        state.users.insert(id, record.clone());
        tracing::debug!(user_id = id, "User stored");

        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<UserRecord>> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }
}
