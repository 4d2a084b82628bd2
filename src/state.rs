//! Shared application state injected into handlers.

use std::sync::Arc;

use chrono::Duration;

use crate::application::services::{AuthService, ItemService};
use crate::config::StoreBackend;
use crate::domain::repositories::{ItemRepository, UserRepository};
use crate::infrastructure::memory::{InMemoryItemRepository, InMemoryUserRepository};
use crate::utils::jwt::TokenSigner;

/// Services and settings shared by every request.
///
/// Services hold trait objects so one router type serves either backend;
/// the concrete store is chosen once, in [`crate::server::build_state`].
#[derive(Clone)]
pub struct AppState {
    pub item_service: Arc<ItemService<dyn ItemRepository>>,
    pub auth_service: Arc<AuthService<dyn UserRepository>>,
    pub store_backend: StoreBackend,
    pub environment: Arc<str>,
}

impl AppState {
    pub fn new(
        items: Arc<dyn ItemRepository>,
        users: Arc<dyn UserRepository>,
        signer: TokenSigner,
        token_ttl: Duration,
        store_backend: StoreBackend,
        environment: &str,
    ) -> Self {
        Self {
            item_service: Arc::new(ItemService::new(items)),
            auth_service: Arc::new(AuthService::new(users, signer, token_ttl)),
            store_backend,
            environment: Arc::from(environment),
        }
    }

    /// State backed by fresh in-memory stores.
    pub fn in_memory(secret_key: &str, token_ttl: Duration, environment: &str) -> Self {
        Self::new(
            Arc::new(InMemoryItemRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
            TokenSigner::new(secret_key),
            token_ttl,
            StoreBackend::Memory,
            environment,
        )
    }
}
