//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide the API used by HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::item_service::ItemService`] - Item validation and lifecycle
//! - [`services::auth_service::AuthService`] - Registration, login and bearer tokens

pub mod services;
