//! gRPC protocol buffer definitions.
//!
//! This crate contains the generated gRPC service definitions for
//! UserService: save (create-or-replace), list, update, delete and fetch by id.

/// User service definitions.
pub mod user {
    tonic::include_proto!("user");
}

// Re-export commonly used items
pub use user::user_service_client::UserServiceClient;
pub use user::user_service_server::{UserService, UserServiceServer};
