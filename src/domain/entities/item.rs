//! Item entity, the sole managed resource.

use chrono::{DateTime, Utc};

/// A priced, named, optionally described record.
///
/// `id` and `created_at` are assigned by the store and never change.
/// `updated_at` stays `None` until the first successful update.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Logical lifecycle state of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Active,
    Inactive,
}

impl Item {
    /// Builds a freshly created item: active, never updated.
    pub fn new(id: i64, new_item: NewItem, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new_item.name,
            description: new_item.description,
            price: new_item.price,
            is_active: true,
            created_at,
            updated_at: None,
        }
    }

    pub fn state(&self) -> ItemState {
        if self.is_active {
            ItemState::Active
        } else {
            ItemState::Inactive
        }
    }

    /// Applies a validated patch and stamps `updated_at`.
    pub fn apply(&mut self, patch: ItemPatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        self.updated_at = Some(now);
    }
}

/// Validated input for creating an item.
///
/// Produced by [`crate::domain::validation::validate_new_item`]; the name is
/// already trimmed and the price rounded.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// Validated partial update for an existing item.
///
/// `None` fields are left unchanged. `description: Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub price: Option<f64>,
    pub is_active: Option<bool>,
}

impl ItemPatch {
    /// Returns true if the patch changes no field.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.is_active.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Item {
        Item::new(
            1,
            NewItem {
                name: "Widget".to_string(),
                description: Some("A widget".to_string()),
                price: 9.5,
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_new_item_is_active_and_not_updated() {
        let item = widget();

        assert_eq!(item.id, 1);
        assert!(item.is_active);
        assert_eq!(item.state(), ItemState::Active);
        assert!(item.updated_at.is_none());
    }

    #[test]
    fn test_apply_partial_patch() {
        let mut item = widget();
        let now = Utc::now();

        item.apply(
            ItemPatch {
                price: Some(5.0),
                ..Default::default()
            },
            now,
        );

        assert_eq!(item.price, 5.0);
        assert_eq!(item.name, "Widget");
        assert_eq!(item.description.as_deref(), Some("A widget"));
        assert_eq!(item.updated_at, Some(now));
    }

    #[test]
    fn test_apply_toggles_state_and_clears_description() {
        let mut item = widget();

        item.apply(
            ItemPatch {
                description: Some(None),
                is_active: Some(false),
                ..Default::default()
            },
            Utc::now(),
        );

        assert_eq!(item.state(), ItemState::Inactive);
        assert!(item.description.is_none());
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(ItemPatch::default().is_empty());
        assert!(
            !ItemPatch {
                is_active: Some(true),
                ..Default::default()
            }
            .is_empty()
        );
    }
}
