//! User entity for the authentication endpoints.

use chrono::{DateTime, Utc};

/// A registered user.
///
/// `hashed_password` holds an Argon2 PHC string; the raw password is never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub hashed_password: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub hashed_password: String,
}
