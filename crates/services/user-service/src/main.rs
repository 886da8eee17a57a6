//! User Service - gRPC server and client CLI for user management.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::AppResult;
use domain::{SaveUser, UpdateUser, UserId};
use user_service_lib::client::UserClient;
use user_service_lib::config::{client_config_from_env, StorageBackend, UserServiceConfig};
use user_service_lib::service::UserService;
use user_service_lib::MigrateAction;

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User management microservice")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gRPC server
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
        /// Where user records are kept
        #[arg(long, value_enum)]
        storage: Option<StorageBackend>,
    },
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// Call a running user-service
    Users {
        /// gRPC endpoint, e.g. http://localhost:50052
        #[arg(long)]
        endpoint: Option<String>,
        #[command(subcommand)]
        action: UserCommands,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[derive(Subcommand)]
enum UserCommands {
    /// List all users
    List,
    /// Show one user
    Get { id: UserId },
    /// Create a user, or replace an existing one with --id
    Save {
        #[arg(long)]
        id: Option<UserId>,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Change some fields of a user
    Update {
        id: UserId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete a user
    Delete { id: UserId },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let mut config = UserServiceConfig::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.service.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            storage,
        } => {
            if let Some(host) = host {
                config.service.host = host;
            }
            if let Some(port) = port {
                config.service.port = port;
            }
            if let Some(storage) = storage {
                config.storage = storage;
            }
            user_service_lib::run(config).await?;
        }
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            user_service_lib::run_migrations(&config, migrate_action).await?;
        }
        Commands::Users { endpoint, action } => {
            let mut client_config = client_config_from_env();
            if let Some(endpoint) = endpoint {
                client_config.endpoint = endpoint;
            }

            let result = match UserClient::connect(&client_config).await {
                Ok(client) => run_user_command(&client, action).await,
                Err(e) => Err(e),
            };

            if let Err(err) = result {
                eprintln!("error [{}]: {}", err.code(), err.user_message());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Execute one client command and print the outcome as JSON.
async fn run_user_command(service: &dyn UserService, action: UserCommands) -> AppResult<()> {
    let output = match action {
        UserCommands::List => to_json(&service.get_all_users().await?)?,
        UserCommands::Get { id } => to_json(&service.get_user_by_id(id).await?)?,
        UserCommands::Save { id, name, email } => to_json(
            &service
                .save_user(SaveUser {
                    user_id: id,
                    name,
                    email,
                })
                .await?,
        )?,
        UserCommands::Update { id, name, email } => to_json(
            &service
                .update_user(UpdateUser {
                    user_id: id,
                    name,
                    email,
                })
                .await?,
        )?,
        UserCommands::Delete { id } => {
            service.delete_user(id).await?;
            format!("deleted user {}", id)
        }
    };

    println!("{}", output);
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| common::AppError::internal(format!("Failed to render output: {}", e)))
}
