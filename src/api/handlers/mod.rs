//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod health;
pub mod info;
pub mod items;

pub use auth::{login_handler, me_handler, register_handler};
pub use health::health_handler;
pub use info::info_handler;
pub use items::{
    create_item_handler, delete_item_handler, get_item_handler, list_items_handler,
    update_item_handler,
};
