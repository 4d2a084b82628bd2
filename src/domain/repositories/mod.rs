//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access so the same services run against the
//! in-memory store or PostgreSQL, selected at startup.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::{memory, persistence}`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ItemRepository`] - Item CRUD and pagination
//! - [`UserRepository`] - User accounts for authentication

pub mod item_repository;
pub mod user_repository;

pub use item_repository::ItemRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use item_repository::MockItemRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
