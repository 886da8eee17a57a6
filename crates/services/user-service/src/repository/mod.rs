//! Repository layer for data access.

pub mod entities;
mod memory;
mod user_repository;

pub use memory::MemoryUserStore;
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
