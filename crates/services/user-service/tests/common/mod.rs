//! Shared fixtures for user-service integration tests.
#![allow(dead_code)]

pub mod contract;

use std::sync::Arc;

use ::common::DatabaseConfig;
use user_service_lib::infra::Database;
use user_service_lib::repository::{MemoryUserStore, UserStore};
use user_service_lib::service::{UserManager, UserService};

/// Service backed by a fresh in-memory store.
pub fn memory_service() -> Arc<dyn UserService> {
    Arc::new(UserManager::new(Arc::new(MemoryUserStore::new())))
}

/// Fresh in-memory SQLite database with migrations applied.
///
/// A single pooled connection keeps every query on the same database.
pub async fn sqlite_database() -> Database {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };

    Database::connect(&config)
        .await
        .expect("Failed to open in-memory SQLite database")
}

/// Service backed by SeaORM on in-memory SQLite.
pub async fn sqlite_service() -> Arc<dyn UserService> {
    let db = sqlite_database().await;
    Arc::new(UserManager::new(Arc::new(UserStore::new(db.get_connection()))))
}
