//! In-memory repository implementations.
//!
//! Selected with `STORE_BACKEND=memory`. Data lives as long as the process.

mod item_store;
mod user_store;

pub use item_store::InMemoryItemRepository;
pub use user_store::InMemoryUserRepository;
