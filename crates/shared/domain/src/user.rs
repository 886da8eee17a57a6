//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Integer key identifying a user record.
pub type UserId = i32;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record with both timestamps set to now
    pub fn new(user_id: UserId, name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            name,
            email,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update; `None` fields keep their current value
    pub fn apply(&mut self, name: Option<String>, email: Option<String>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        self.updated_at = Utc::now();
    }
}

/// Input of a save (create-or-replace) operation.
///
/// Without `user_id` a new record is created. With a `user_id` that already
/// exists the stored record is replaced; an unknown `user_id` creates a new
/// record under a store-assigned key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveUser {
    pub user_id: Option<UserId>,
    /// User display name
    pub name: String,
    /// User email address
    pub email: String,
}

impl SaveUser {
    /// Save input for a brand new record
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id: None,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Save input targeting an existing key
    pub fn with_id(user_id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Partial update of an existing user, keyed by `user_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUser {
    pub user_id: UserId,
    /// New display name
    pub name: Option<String>,
    /// New email address
    pub email: Option<String>,
}
