//! Item management service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::Item;
use crate::domain::repositories::ItemRepository;
use crate::domain::validation::{ItemChanges, ItemDraft, validate_item_changes, validate_new_item};
use crate::error::AppError;

/// Service for creating, listing, updating and deleting items.
///
/// Inputs arrive as raw drafts and are validated here before the store is
/// touched, so a rejected request never mutates anything.
pub struct ItemService<R: ItemRepository + ?Sized> {
    repository: Arc<R>,
}

fn item_not_found(id: i64) -> AppError {
    AppError::not_found(
        format!("Item with ID {id} not found"),
        json!({ "item_id": id }),
    )
}

impl<R: ItemRepository + ?Sized> ItemService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates a draft and stores it as a new active item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing every offending field.
    pub async fn create_item(&self, draft: ItemDraft) -> Result<Item, AppError> {
        let new_item = validate_new_item(draft)?;
        let item = self.repository.create(new_item).await?;

        tracing::info!(item_id = item.id, name = %item.name, "Item created");
        Ok(item)
    }

    /// Returns a window of items in insertion order.
    pub async fn list_items(&self, skip: u64, limit: u64) -> Result<Vec<Item>, AppError> {
        self.repository.list(skip, limit).await
    }

    /// Total number of stored items, independent of pagination.
    pub async fn count_items(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no item has this id.
    pub async fn get_item(&self, id: i64) -> Result<Item, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| item_not_found(id))
    }

    /// Applies a partial update.
    ///
    /// Field validation runs before the lookup: an invalid body is rejected
    /// with 422 even when the id does not exist. An empty body still stamps
    /// `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for invalid fields and
    /// [`AppError::NotFound`] if no item has this id.
    pub async fn update_item(&self, id: i64, changes: ItemChanges) -> Result<Item, AppError> {
        let patch = validate_item_changes(changes)?;

        let item = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(|| item_not_found(id))?;

        tracing::info!(item_id = item.id, state = ?item.state(), "Item updated");
        Ok(item)
    }

    /// Removes an item and returns what was stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no item has this id.
    pub async fn delete_item(&self, id: i64) -> Result<Item, AppError> {
        let item = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| item_not_found(id))?;

        tracing::info!(item_id = item.id, name = %item.name, "Item deleted");
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ItemPatch, ItemState, NewItem};
    use crate::domain::repositories::MockItemRepository;
    use chrono::Utc;

    fn create_test_item(id: i64, name: &str, price: f64) -> Item {
        Item::new(
            id,
            NewItem {
                name: name.to_string(),
                description: None,
                price,
            },
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_create_item_validates_and_rounds() {
        let mut mock_repo = MockItemRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_item: &NewItem| new_item.name == "Widget" && new_item.price == 10.0)
            .times(1)
            .returning(|new_item| Ok(Item::new(1, new_item, Utc::now())));

        let service = ItemService::new(Arc::new(mock_repo));

        let item = service
            .create_item(ItemDraft {
                name: Some("  Widget  ".to_string()),
                description: None,
                price: Some(9.999),
            })
            .await
            .unwrap();

        assert_eq!(item.id, 1);
        assert_eq!(item.name, "Widget");
        assert_eq!(item.price, 10.0);
    }

    #[tokio::test]
    async fn test_create_item_invalid_never_reaches_store() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo.expect_create().times(0);

        let service = ItemService::new(Arc::new(mock_repo));

        let result = service
            .create_item(ItemDraft {
                name: Some(String::new()),
                description: None,
                price: Some(-1.0),
            })
            .await;

        match result {
            Err(AppError::Validation { details, .. }) => {
                let errors = details["validation_errors"].as_array().unwrap();
                assert_eq!(errors.len(), 2);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_item_not_found() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|_| Ok(None));

        let service = ItemService::new(Arc::new(mock_repo));

        let err = service.get_item(7).await.unwrap_err();
        assert_eq!(err.message(), "Item with ID 7 not found");
        match err {
            AppError::NotFound { details, .. } => assert_eq!(details["item_id"], 7),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_item_validation_precedes_lookup() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo.expect_update().times(0);

        let service = ItemService::new(Arc::new(mock_repo));

        let result = service
            .update_item(
                999,
                ItemChanges {
                    price: Some(Some(-5.0)),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_update_item_passes_patch() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_update()
            .withf(|id, patch: &ItemPatch| {
                *id == 3 && patch.is_active == Some(false) && patch.name.is_none()
            })
            .times(1)
            .returning(|id, patch| {
                let mut item = create_test_item(id, "Widget", 1.0);
                item.apply(patch, Utc::now());
                Ok(Some(item))
            });

        let service = ItemService::new(Arc::new(mock_repo));

        let item = service
            .update_item(
                3,
                ItemChanges {
                    is_active: Some(Some(false)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(item.state(), ItemState::Inactive);
        assert!(item.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_update_item_not_found() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_update()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = ItemService::new(Arc::new(mock_repo));

        let result = service.update_item(42, ItemChanges::default()).await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_item_returns_removed() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_delete()
            .times(1)
            .returning(|id| Ok(Some(create_test_item(id, "Widget", 1.0))));

        let service = ItemService::new(Arc::new(mock_repo));

        let item = service.delete_item(5).await.unwrap();
        assert_eq!(item.id, 5);
        assert_eq!(item.name, "Widget");
    }

    #[tokio::test]
    async fn test_list_and_count_delegate() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_list()
            .withf(|skip, limit| *skip == 10 && *limit == 5)
            .times(1)
            .returning(|_, _| Ok(vec![create_test_item(11, "a", 1.0)]));
        mock_repo.expect_count().times(1).returning(|| Ok(11));

        let service = ItemService::new(Arc::new(mock_repo));

        assert_eq!(service.list_items(10, 5).await.unwrap().len(), 1);
        assert_eq!(service.count_items().await.unwrap(), 11);
    }
}
