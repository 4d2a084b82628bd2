//! Application error type and its HTTP translation.
//!
//! Every failure that reaches the router boundary is an [`AppError`]. It is
//! rendered as the standard failure envelope:
//!
//! ```json
//! {
//!   "error": "NOT_FOUND",
//!   "message": "Item with ID 7 not found",
//!   "details": { "item_id": 7 },
//!   "timestamp": "2026-01-01T00:00:00Z"
//! }
//! ```
//!
//! Internal errors are logged with their details and returned with a generic
//! message only.

use axum::{
    Json,
    extract::rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;

use crate::domain::validation::{FieldError, FieldErrors};

const INTERNAL_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Serialized failure envelope.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
    pub details: Value,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Conflict { message: String, details: Value },
    Unauthorized { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Builds a validation error for a single field.
    pub fn invalid_field(field: &str, code: &'static str, message: impl Into<String>) -> Self {
        FieldErrors(vec![FieldError::new(field, code, message)]).into()
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "VALIDATION_ERROR",
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::Conflict { .. } => "CONFLICT",
            AppError::Unauthorized { .. } => "UNAUTHORIZED",
            AppError::Internal { .. } => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Conflict { message, .. }
            | AppError::Unauthorized { message, .. }
            | AppError::Internal { message, .. } => message,
        }
    }

    /// Converts the error into the response envelope.
    ///
    /// Internal errors lose their message and details here.
    pub fn to_error_response(&self) -> ErrorResponse {
        let (message, details) = match self {
            AppError::Internal { .. } => (INTERNAL_MESSAGE.to_string(), Value::Null),
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Conflict { message, details }
            | AppError::Unauthorized { message, details } => (message.clone(), details.clone()),
        };

        ErrorResponse {
            error: self.code(),
            message,
            details,
            timestamp: Utc::now(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "Unexpected error");
            }
            AppError::Validation { message, details } => {
                tracing::debug!(%message, %details, "Validation failed");
            }
            other => {
                tracing::warn!(code = other.code(), message = other.message(), "Request failed");
            }
        }

        let status = self.status();
        let body = self.to_error_response();
        let mut response = (status, Json(body)).into_response();

        if matches!(self, AppError::Unauthorized { .. }) {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::validation(
            "Request validation failed",
            json!({ "validation_errors": errors.0 }),
        )
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut collected = FieldErrors::default();

        for (field, field_errors) in errors.field_errors() {
            for err in field_errors.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}"));
                collected.push(FieldError::new(field.to_string(), "invalid", message));
            }
        }

        collected.0.sort_by(|a, b| a.field.cmp(&b.field));
        collected.into()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        AppError::internal("Database error", json!({ "cause": e.to_string() }))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::invalid_field("body", "invalid_body", rejection.body_text())
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::invalid_field("body", "invalid_form", rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::invalid_field("path", "invalid_path", rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::invalid_field("query", "invalid_query", rejection.body_text())
    }
}
