//! Field validation for item creation and partial updates.
//!
//! Validation runs before any store mutation and returns either the
//! normalized input ([`NewItem`] / [`ItemPatch`]) or every field that failed,
//! so callers can report all problems in a single response.

use serde::Serialize;
use std::fmt;

use crate::domain::entities::{ItemPatch, NewItem};

/// Maximum length of an item name, in characters, after trimming.
pub const NAME_MAX_LEN: usize = 100;

/// Maximum length of an item description, in characters.
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// A single failed field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub code: &'static str,
}

impl FieldError {
    pub fn new(field: impl Into<String>, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code,
        }
    }
}

/// All field errors collected while validating one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(pub Vec<FieldError>);

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.0.iter().map(|e| e.field.as_str()).collect();
        write!(f, "invalid field(s): {}", fields.join(", "))
    }
}

impl std::error::Error for FieldErrors {}

impl FieldErrors {
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `Ok(value)` when no errors were collected.
    fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

/// Raw creation input as received from a client.
///
/// Required fields are optional here so that a missing field is reported as a
/// field error instead of a deserialization failure.
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

/// Raw update input as received from a client.
///
/// Outer `None` means the field was absent and stays unchanged; `Some(None)`
/// means the client sent an explicit `null`.
#[derive(Debug, Clone, Default)]
pub struct ItemChanges {
    pub name: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub price: Option<Option<f64>>,
    pub is_active: Option<Option<bool>>,
}

/// Validates creation input.
///
/// # Rules
///
/// - `name`: required, trimmed, 1..=100 characters
/// - `description`: optional, at most 500 characters
/// - `price`: required, finite, `>= 0`, rounded to 2 decimals
pub fn validate_new_item(draft: ItemDraft) -> Result<NewItem, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = match draft.name {
        Some(raw) => check_name(&raw, &mut errors),
        None => {
            errors.push(FieldError::new("name", "required", "Field is required"));
            None
        }
    };

    if let Some(description) = &draft.description {
        check_description(description, &mut errors);
    }

    let price = match draft.price {
        Some(raw) => check_price(raw, &mut errors),
        None => {
            errors.push(FieldError::new("price", "required", "Field is required"));
            None
        }
    };

    match (name, price) {
        (Some(name), Some(price)) => errors.into_result(NewItem {
            name,
            description: draft.description,
            price,
        }),
        _ => Err(errors),
    }
}

/// Validates partial update input.
///
/// Only supplied fields are checked. `description: null` clears the
/// description; `null` for `name`, `price` or `is_active` is rejected.
pub fn validate_item_changes(changes: ItemChanges) -> Result<ItemPatch, FieldErrors> {
    let mut errors = FieldErrors::default();
    let mut patch = ItemPatch::default();

    match changes.name {
        Some(Some(raw)) => patch.name = check_name(&raw, &mut errors),
        Some(None) => errors.push(not_nullable("name")),
        None => {}
    }

    if let Some(description) = changes.description {
        if let Some(text) = &description {
            check_description(text, &mut errors);
        }
        patch.description = Some(description);
    }

    match changes.price {
        Some(Some(raw)) => patch.price = check_price(raw, &mut errors),
        Some(None) => errors.push(not_nullable("price")),
        None => {}
    }

    match changes.is_active {
        Some(Some(flag)) => patch.is_active = Some(flag),
        Some(None) => errors.push(not_nullable("is_active")),
        None => {}
    }

    errors.into_result(patch)
}

/// Rounds a price to 2 decimal places, normalizing `-0.0` to `0.0`.
///
/// Rounds the exact binary value, ties to even: `2.675` is stored as
/// `2.67499..` and becomes `2.67`, and `0.125` becomes `0.12`.
pub fn round_price(price: f64) -> f64 {
    let rounded = format!("{price:.2}").parse::<f64>().unwrap_or(price);
    if rounded == 0.0 { 0.0 } else { rounded }
}

fn check_name(raw: &str, errors: &mut FieldErrors) -> Option<String> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        errors.push(FieldError::new("name", "empty", "Name cannot be empty"));
        return None;
    }

    if trimmed.chars().count() > NAME_MAX_LEN {
        errors.push(FieldError::new(
            "name",
            "too_long",
            format!("Name must be at most {NAME_MAX_LEN} characters"),
        ));
        return None;
    }

    Some(trimmed.to_string())
}

fn check_description(description: &str, errors: &mut FieldErrors) {
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        errors.push(FieldError::new(
            "description",
            "too_long",
            format!("Description must be at most {DESCRIPTION_MAX_LEN} characters"),
        ));
    }
}

fn check_price(raw: f64, errors: &mut FieldErrors) -> Option<f64> {
    if !raw.is_finite() {
        errors.push(FieldError::new("price", "not_finite", "Price must be a finite number"));
        return None;
    }

    if raw < 0.0 {
        errors.push(FieldError::new(
            "price",
            "negative",
            "Price must be greater than or equal to 0",
        ));
        return None;
    }

    Some(round_price(raw))
}

fn not_nullable(field: &str) -> FieldError {
    FieldError::new(field, "null", "Field cannot be null")
}
