//! Repository trait for item storage.

use crate::domain::entities::{Item, ItemPatch, NewItem};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the item store.
///
/// The store owns identity and lifetime: ids are assigned sequentially on
/// [`create`](ItemRepository::create) and never reused by callers. Missing ids
/// are reported as `Ok(None)`; turning that into a not-found error is the
/// service's job.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryItemRepository`] - process memory
/// - [`crate::infrastructure::persistence::PgItemRepository`] - PostgreSQL table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Persists a validated item, assigning the next id and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_item: NewItem) -> Result<Item, AppError>;

    /// Lists items in insertion order.
    ///
    /// Skips `skip` items and returns at most `limit`. Out-of-range values
    /// yield an empty vector.
    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Item>, AppError>;

    /// Finds an item by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, AppError>;

    /// Applies a validated patch and sets `updated_at` to now.
    ///
    /// Returns `Ok(None)` if no item has this id.
    async fn update(&self, id: i64, patch: ItemPatch) -> Result<Option<Item>, AppError>;

    /// Removes an item and returns it.
    ///
    /// Returns `Ok(None)` if no item has this id.
    async fn delete(&self, id: i64) -> Result<Option<Item>, AppError>;

    /// Counts stored items.
    async fn count(&self) -> Result<i64, AppError>;
}
