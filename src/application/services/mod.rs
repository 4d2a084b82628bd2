//! Business logic services for the application layer.

pub mod auth_service;
pub mod item_service;

pub use auth_service::AuthService;
pub use item_service::ItemService;
