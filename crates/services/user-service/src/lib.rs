//! User Service Library
//!
//! This crate provides user management (save, list, update, delete and
//! fetch by id) behind the `UserService` contract, served over gRPC.

pub mod client;
pub mod config;
pub mod grpc;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use tonic::transport::Server;
use tracing::info;

use crate::config::{StorageBackend, UserServiceConfig};
use crate::grpc::UserGrpcService;
use crate::infra::Database;
use crate::repository::{MemoryUserStore, UserRepository, UserStore};
use crate::service::{UserManager, UserService};

/// Run the gRPC server with the given configuration.
pub async fn run(config: UserServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let user_service = build_service(&config).await?;

    // Create gRPC service
    let grpc_service = UserGrpcService::new(user_service);

    // Build address
    let addr: SocketAddr = format!("{}:{}", config.service.host, config.service.port).parse()?;
    info!(
        storage = %config.storage,
        "{} listening on {}", config.service.service_name, addr
    );

    // Run server
    Server::builder()
        .add_service(proto::UserServiceServer::new(grpc_service))
        .serve(addr)
        .await?;

    Ok(())
}

/// Wire the configured repository into a `UserManager`.
pub async fn build_service(
    config: &UserServiceConfig,
) -> Result<Arc<dyn UserService>, Box<dyn std::error::Error>> {
    let user_repo: Arc<dyn UserRepository> = match config.storage {
        StorageBackend::Database => {
            let db = Database::connect(&config.database).await?;
            Arc::new(UserStore::new(db.get_connection()))
        }
        StorageBackend::Memory => {
            info!("Using in-memory storage; records are lost on shutdown");
            Arc::new(MemoryUserStore::new())
        }
    };

    Ok(Arc::new(UserManager::new(user_repo)))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &UserServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
