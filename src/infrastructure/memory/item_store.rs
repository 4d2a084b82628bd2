//! In-process item store.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Item, ItemPatch, NewItem};
use crate::domain::repositories::ItemRepository;
use crate::error::AppError;

#[derive(Debug)]
struct ItemTable {
    next_id: i64,
    items: BTreeMap<i64, Item>,
}

/// Item store held in process memory.
///
/// The id counter and the map sit behind one lock; every mutation takes the
/// write half, so ids are never handed out twice and concurrent updates are
/// applied one after another. Ids grow monotonically, so key order in the
/// `BTreeMap` is insertion order.
#[derive(Debug)]
pub struct InMemoryItemRepository {
    table: RwLock<ItemTable>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        tracing::debug!("Using in-memory item store");
        Self {
            table: RwLock::new(ItemTable {
                next_id: 1,
                items: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, new_item: NewItem) -> Result<Item, AppError> {
        let mut table = self.table.write().await;

        let id = table.next_id;
        table.next_id += 1;

        let item = Item::new(id, new_item, Utc::now());
        table.items.insert(id, item.clone());

        Ok(item)
    }

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Item>, AppError> {
        let table = self.table.read().await;

        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(table
            .items
            .values()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, AppError> {
        Ok(self.table.read().await.items.get(&id).cloned())
    }

    async fn update(&self, id: i64, patch: ItemPatch) -> Result<Option<Item>, AppError> {
        let mut table = self.table.write().await;

        Ok(table.items.get_mut(&id).map(|item| {
            item.apply(patch, Utc::now());
            item.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<Option<Item>, AppError> {
        Ok(self.table.write().await.items.remove(&id))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let len = self.table.read().await.items.len();
        Ok(i64::try_from(len).unwrap_or(i64::MAX))
    }
}
