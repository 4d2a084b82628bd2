//! PostgreSQL implementation of item repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Item, ItemPatch, NewItem};
use crate::domain::repositories::ItemRepository;
use crate::error::AppError;

const ITEM_COLUMNS: &str = "id, name, description, price, is_active, created_at, updated_at";

#[derive(Debug, FromRow)]
struct ItemRow {
    id: i64,
    name: String,
    description: Option<String>,
    price: f64,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL repository for items.
///
/// Every operation is a single statement, so concurrent writers are
/// serialized by row locks and ids come from the `BIGSERIAL` sequence.
pub struct PgItemRepository {
    pool: Arc<PgPool>,
}

impl PgItemRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Clamps an unsigned page bound into the range Postgres accepts for
/// `LIMIT`/`OFFSET`.
fn to_bigint(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn create(&self, new_item: NewItem) -> Result<Item, AppError> {
        let sql = format!(
            "INSERT INTO items (name, description, price) VALUES ($1, $2, $3) RETURNING {ITEM_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ItemRow>(&sql)
            .bind(new_item.name)
            .bind(new_item.description)
            .bind(new_item.price)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Item>, AppError> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM items ORDER BY id LIMIT $1 OFFSET $2");

        let rows = sqlx::query_as::<_, ItemRow>(&sql)
            .bind(to_bigint(limit))
            .bind(to_bigint(skip))
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, AppError> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = $1");

        let row = sqlx::query_as::<_, ItemRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Item::from))
    }

    async fn update(&self, id: i64, patch: ItemPatch) -> Result<Option<Item>, AppError> {
        let clear_or_set_description = patch.description.is_some();
        let description = patch.description.flatten();

        let sql = format!(
            r#"
            UPDATE items SET
                name = COALESCE($2, name),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                price = COALESCE($5, price),
                is_active = COALESCE($6, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {ITEM_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, ItemRow>(&sql)
            .bind(id)
            .bind(patch.name)
            .bind(clear_or_set_description)
            .bind(description)
            .bind(patch.price)
            .bind(patch.is_active)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Item::from))
    }

    async fn delete(&self, id: i64) -> Result<Option<Item>, AppError> {
        let sql = format!("DELETE FROM items WHERE id = $1 RETURNING {ITEM_COLUMNS}");

        let row = sqlx::query_as::<_, ItemRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Item::from))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
