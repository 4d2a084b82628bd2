//! Security helpers used by the authentication service.
//!
//! - [`password`] - Argon2 password hashing and verification
//! - [`jwt`] - HS256 access token issuance and verification

pub mod jwt;
pub mod password;
