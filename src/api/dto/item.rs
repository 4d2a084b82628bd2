//! DTOs for the item endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Item;
use crate::domain::validation::{ItemChanges, ItemDraft};

/// Request body for `POST /api/v1/items`.
///
/// Every field is optional at the serde level so that a missing `name` or
/// `price` is reported as a field error with the rest of the validation.
#[derive(Debug, Default, Deserialize)]
pub struct CreateItemRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub price: Option<f64>,
}

impl From<CreateItemRequest> for ItemDraft {
    fn from(req: CreateItemRequest) -> Self {
        ItemDraft {
            name: req.name,
            description: req.description,
            price: req.price,
        }
    }
}

/// Request body for `PUT /api/v1/items/{id}`.
///
/// Absent fields stay unchanged; an explicit `null` is kept distinct from
/// absence so `description: null` can clear the description.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub name: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub price: Option<Option<f64>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub is_active: Option<Option<bool>>,
}

impl From<UpdateItemRequest> for ItemChanges {
    fn from(req: UpdateItemRequest) -> Self {
        ItemChanges {
            name: req.name,
            description: req.description,
            price: req.price,
            is_active: req.is_active,
        }
    }
}

/// JSON representation of an item.
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            is_active: item.is_active,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// Payload of the delete confirmation envelope.
#[derive(Debug, Serialize)]
pub struct DeletedItem {
    pub deleted_item_id: i64,
}
