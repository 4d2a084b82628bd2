//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Item`] - A priced, named, optionally described record
//! - [`User`] - A registered account used by the auth endpoints
//!
//! # Design Pattern
//!
//! Entities come with separate input structs:
//! - `NewItem`, `NewUser` - For creating new records
//! - `ItemPatch` - For partial updates

pub mod item;
pub mod user;

pub use item::{Item, ItemPatch, ItemState, NewItem};
pub use user::{NewUser, User};
