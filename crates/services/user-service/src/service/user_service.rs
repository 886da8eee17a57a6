//! User service - the CRUD contract over user records.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use common::{AppResult, OptionExt};
use domain::{SaveUser, UpdateUser, User, UserId};

use crate::repository::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
///
/// Operations on an id that does not exist fail with `AppError::NotFound`
/// and leave every other record untouched.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user, or replace the one stored under `user.user_id`.
    ///
    /// An absent or unknown id creates a new record; the returned user
    /// carries the id it was actually stored under.
    async fn save_user(&self, user: SaveUser) -> AppResult<User>;

    /// List every user, ordered by id
    async fn get_all_users(&self) -> AppResult<Vec<User>>;

    /// Apply a partial update to an existing user
    async fn update_user(&self, user: UpdateUser) -> AppResult<User>;

    /// Remove a user
    async fn delete_user(&self, user_id: UserId) -> AppResult<()>;

    /// Fetch a single user
    async fn get_user_by_id(&self, user_id: UserId) -> AppResult<User>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn save_user(&self, user: SaveUser) -> AppResult<User> {
        let SaveUser {
            user_id,
            name,
            email,
        } = user;

        if let Some(id) = user_id {
            if self.repo.find_by_id(id).await?.is_some() {
                let saved = self.repo.update(id, Some(name), Some(email)).await?;
                info!(user_id = saved.user_id, "Replaced user");
                return Ok(saved);
            }
            debug!(user_id = id, "No user under requested id, creating a new one");
        }

        let saved = self.repo.create(name, email).await?;
        info!(user_id = saved.user_id, "Created user");
        Ok(saved)
    }

    async fn get_all_users(&self) -> AppResult<Vec<User>> {
        let users = self.repo.list().await?;
        debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    async fn update_user(&self, user: UpdateUser) -> AppResult<User> {
        let updated = self
            .repo
            .update(user.user_id, user.name, user.email)
            .await?;
        info!(user_id = updated.user_id, "Updated user");
        Ok(updated)
    }

    async fn delete_user(&self, user_id: UserId) -> AppResult<()> {
        self.repo.delete(user_id).await?;
        info!(user_id, "Deleted user");
        Ok(())
    }

    async fn get_user_by_id(&self, user_id: UserId) -> AppResult<User> {
        debug!(user_id, "Fetching user");
        self.repo.find_by_id(user_id).await?.ok_or_not_found()
    }
}
