//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, database connections, and Axum server lifecycle.

use crate::config::{Config, StoreBackend};
use crate::infrastructure::memory::{InMemoryItemRepository, InMemoryUserRepository};
use crate::infrastructure::persistence::{PgItemRepository, PgUserRepository, run_migrations};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::jwt::TokenSigner;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Opens a PostgreSQL pool tuned by the `DB_*` settings.
///
/// # Errors
///
/// Returns an error if no database URL is configured or the first
/// connection cannot be established.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let url = config
        .database_url
        .as_deref()
        .context("Database URL is not configured")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");
    Ok(pool)
}

/// Builds the application state for the configured backend.
///
/// For PostgreSQL this connects and applies pending migrations; the memory
/// backend starts empty.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let signer = TokenSigner::new(&config.secret_key);
    let token_ttl = chrono::Duration::minutes(config.access_token_ttl_minutes);

    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on restart");
            Ok(AppState::new(
                Arc::new(InMemoryItemRepository::new()),
                Arc::new(InMemoryUserRepository::new()),
                signer,
                token_ttl,
                StoreBackend::Memory,
                &config.environment,
            ))
        }
        StoreBackend::Postgres => {
            let pool = connect_pool(config).await?;
            run_migrations(&pool)
                .await
                .context("Failed to apply database migrations")?;
            tracing::info!("Database migrations applied");

            let pool = Arc::new(pool);
            Ok(AppState::new(
                Arc::new(PgItemRepository::new(pool.clone())),
                Arc::new(PgUserRepository::new(pool)),
                signer,
                token_ttl,
                StoreBackend::Postgres,
                &config.environment,
            ))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Item and user stores (memory or PostgreSQL)
/// - Axum HTTP server with trailing-slash normalization
///
/// Stops accepting connections on Ctrl-C or SIGTERM and waits for in-flight
/// requests to finish.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = NormalizePathLayer::trim_trailing_slash()
        .layer(app_router(state, &config.cors_origins));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
