//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow` row types. Schema lives in `migrations/`.
//!
//! # Repositories
//!
//! - [`PgItemRepository`] - Item storage with paginated listing
//! - [`PgUserRepository`] - User accounts for the auth endpoints

pub mod pg_item_repository;
pub mod pg_user_repository;

pub use pg_item_repository::PgItemRepository;
pub use pg_user_repository::PgUserRepository;

use sqlx::PgPool;
use sqlx::migrate::Migrator;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Applies pending schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Runs a trivial query to confirm the database answers.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}
