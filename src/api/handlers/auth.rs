//! Handlers for registration, login and the current-user profile.

use axum::{Extension, Json, extract::State, http::StatusCode};

use crate::api::dto::auth::{LoginForm, RegisterRequest, TokenResponse, UserProfile};
use crate::api::extractors::{ApiForm, ValidatedJson};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a user and returns an access token.
///
/// # Endpoint
///
/// `POST /auth/register`
///
/// # Errors
///
/// - 422 if the username, email or password is malformed
/// - 409 if the username or email is already registered
pub async fn register_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    let token = state
        .auth_service
        .register(payload.username, payload.email, payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(TokenResponse::bearer(token))))
}

/// Exchanges form-encoded credentials for an access token.
///
/// # Endpoint
///
/// `POST /auth/login` with `application/x-www-form-urlencoded` body
/// `username=...&password=...`
///
/// # Errors
///
/// Returns 401 with `WWW-Authenticate: Bearer` on bad credentials.
pub async fn login_handler(
    State(state): State<AppState>,
    ApiForm(form): ApiForm<LoginForm>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = state
        .auth_service
        .login(&form.username, &form.password)
        .await?;

    Ok(Json(TokenResponse::bearer(token)))
}

/// `GET /auth/me`, behind the bearer middleware.
pub async fn me_handler(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<UserProfile> {
    Json(user.into())
}
