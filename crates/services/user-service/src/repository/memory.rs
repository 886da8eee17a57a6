//! In-memory user repository.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use common::{AppError, AppResult};
use domain::{User, UserId};

use super::UserRepository;

/// Process-local repository. Records live as long as the store does.
///
/// Ids start at 1 and are never reused, even after a delete.
pub struct MemoryUserStore {
    users: RwLock<BTreeMap<UserId, User>>,
    next_id: AtomicI32,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(BTreeMap::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MemoryUserStore {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.read().get(&id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().values().cloned().collect())
    }

    async fn create(&self, name: String, email: String) -> AppResult<User> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        if id <= 0 {
            return Err(AppError::internal("user id space exhausted"));
        }

        let user = User::new(id, name, email);
        self.users.write().insert(id, user.clone());
        Ok(user)
    }

    async fn update(
        &self,
        id: UserId,
        name: Option<String>,
        email: Option<String>,
    ) -> AppResult<User> {
        let mut users = self.users.write();
        let user = users.get_mut(&id).ok_or(AppError::NotFound)?;
        user.apply(name, email);
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> AppResult<()> {
        self.users
            .write()
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::NotFound)
    }
}
