//! gRPC client for calling a running user-service.

mod user_client;

pub use user_client::UserClient;
