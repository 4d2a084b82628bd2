//! Authentication service: registration, login and bearer token checks.

use std::sync::Arc;

use chrono::Duration;
use serde_json::json;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::jwt::{TokenError, TokenSigner};
use crate::utils::password::{hash_password, verify_password};

/// Service for user accounts and their access tokens.
///
/// Passwords are hashed with Argon2 on the blocking pool; tokens are HS256
/// JWTs whose `sub` claim is the username.
pub struct AuthService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
    signer: TokenSigner,
    token_ttl: Duration,
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized("Incorrect username or password", json!(null))
}

fn internal_error(message: &str, cause: impl ToString) -> AppError {
    AppError::internal(message, json!({ "cause": cause.to_string() }))
}

fn invalid_token(reason: &str) -> AppError {
    AppError::unauthorized(
        "Could not validate credentials",
        json!({ "reason": reason }),
    )
}

impl<R: UserRepository + ?Sized> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - user store
    /// - `signer` - token signer built from the server secret
    /// - `token_ttl` - lifetime of issued access tokens
    pub fn new(repository: Arc<R>, signer: TokenSigner, token_ttl: Duration) -> Self {
        Self {
            repository,
            signer,
            token_ttl,
        }
    }

    /// Creates a user account with a hashed password.
    ///
    /// Input shape (username length, email format) is checked by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username or email is taken.
    pub async fn create_user(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> Result<User, AppError> {
        if self.repository.find_by_username(&username).await?.is_some() {
            return Err(AppError::conflict(
                "Username already registered",
                json!({ "field": "username" }),
            ));
        }
        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict(
                "Email already registered",
                json!({ "field": "email" }),
            ));
        }

        let hashed_password = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| internal_error("Password hashing task failed", e))?
            .map_err(|e| internal_error("Password hashing failed", e))?;

        let user = self
            .repository
            .create(NewUser {
                username,
                email,
                hashed_password,
            })
            .await?;

        tracing::info!(user_id = user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Registers a user and returns an access token for them.
    pub async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> Result<String, AppError> {
        let user = self.create_user(username, email, password).await?;
        self.issue_token(&user)
    }

    /// Checks credentials and returns a fresh access token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for an unknown user or a wrong
    /// password, without saying which.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let Some(user) = self.repository.find_by_username(username).await? else {
            tracing::debug!(%username, "Login for unknown user");
            return Err(invalid_credentials());
        };

        let password = password.to_string();
        let hashed = user.hashed_password.clone();
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &hashed))
            .await
            .map_err(|e| internal_error("Password check task failed", e))?;

        match matches {
            Ok(true) => self.issue_token(&user),
            Ok(false) => Err(invalid_credentials()),
            Err(e) => {
                tracing::warn!(user_id = user.id, error = %e, "Stored password hash is unusable");
                Err(invalid_credentials())
            }
        }
    }

    /// Resolves a bearer token to the user it was issued for.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is invalid, expired,
    /// or names a user that no longer exists.
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let claims = self.signer.verify_token(token).map_err(|e| match e {
            TokenError::Expired => invalid_token("Token has expired"),
            _ => invalid_token("Invalid token"),
        })?;

        self.repository
            .find_by_username(&claims.sub)
            .await?
            .ok_or_else(|| invalid_token("User no longer exists"))
    }

    fn issue_token(&self, user: &User) -> Result<String, AppError> {
        self.signer
            .issue_token(&user.username, self.token_ttl)
            .map_err(|e| internal_error("Token signing failed", e))
    }
}
