//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Item input is
//! validated by [`crate::domain::validation`]; auth input uses `validator`.

pub mod auth;
pub mod health;
pub mod item;
pub mod pagination;
pub mod response;
