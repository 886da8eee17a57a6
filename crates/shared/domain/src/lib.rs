//! Domain layer - Core business entities.
//!
//! This crate contains pure domain types with no infrastructure dependencies.
//! They are shared between the service, its repositories and the gRPC layer.

pub mod user;

pub use user::{SaveUser, UpdateUser, User, UserId};
