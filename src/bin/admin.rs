//! CLI administration tool for the Kaivora API.
//!
//! Provides commands for managing users, inspecting items, and performing
//! database operations without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a user (prompts for missing values)
//! cargo run --bin admin -- user create --username carlos --email carlos@kaivora.org
//!
//! # List all users
//! cargo run --bin admin -- user list
//!
//! # List items
//! cargo run --bin admin -- items list --skip 0 --limit 20
//!
//! # Check database connection / show info / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db info
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use kaivora_api::api::dto::auth::RegisterRequest;
use kaivora_api::config::{Config, mask_connection_string};
use kaivora_api::domain::entities::NewUser;
use kaivora_api::domain::repositories::{ItemRepository, UserRepository};
use kaivora_api::error::AppError;
use kaivora_api::infrastructure::persistence::{
    PgItemRepository, PgUserRepository, ping, run_migrations,
};
use kaivora_api::utils::password::hash_password;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

/// CLI tool for managing the Kaivora API.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Inspect items
    Items {
        #[command(subcommand)]
        action: ItemsAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        #[arg(short, long)]
        username: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all users
    List,
}

#[derive(Subcommand)]
enum ItemsAction {
    /// List items in creation order
    List {
        #[arg(long, default_value_t = 0)]
        skip: u64,

        #[arg(long, default_value_t = 100)]
        limit: u64,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?
        .context("DATABASE_URL or DB_USER/DB_PASSWORD/DB_NAME must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Items { action } => handle_items_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Turns a service error into a CLI error with its message and details.
fn cli_error(context: &str, e: AppError) -> anyhow::Error {
    anyhow::anyhow!("{}: {}", context, e)
}

async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = PgUserRepository::new(Arc::new(pool.clone()));

    match action {
        UserAction::Create {
            username,
            email,
            yes,
        } => create_user(&repo, username, email, yes).await,
        UserAction::List => list_users(&repo).await,
    }
}

/// Creates a user with interactive prompts.
///
/// Input goes through the same rules as `POST /auth/register`. The password
/// is read without echo and stored only as an Argon2 hash.
async fn create_user(
    repo: &PgUserRepository,
    username: Option<String>,
    email: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    let request = RegisterRequest {
        username,
        email,
        password,
    };
    if let Err(errors) = request.validate() {
        for (field, errs) in errors.field_errors() {
            for err in errs.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                println!("  {} {}: {}", "✗".red(), field.yellow(), message);
            }
        }
        anyhow::bail!("Invalid user data");
    }

    println!();
    println!("  Username: {}", request.username.cyan());
    println!("  Email:    {}", request.email.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let hashed_password = hash_password(&request.password)?;

    let user = repo
        .create(NewUser {
            username: request.username,
            email: request.email,
            hashed_password,
        })
        .await
        .map_err(|e| cli_error("Failed to create user", e))?;

    println!();
    println!(
        "{} {}",
        "✅ User created with ID".green().bold(),
        user.id.to_string().bright_white().bold()
    );
    println!();
    println!("{}", "Get a token with:".bright_white());
    println!(
        "  curl -X POST -d 'username={}&password=...' http://localhost:8000/auth/login",
        user.username.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all users.
///
/// # Output Format
///
/// ```text
/// 📋 Users
///
///   ID  Username             Email                          Created
///   ─────────────────────────────────────────────────────────────────────────
///   1   carlos               carlos@kaivora.org             2026-01-15 10:30
/// ```
async fn list_users(repo: &PgUserRepository) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = repo
        .list()
        .await
        .map_err(|e| cli_error("Failed to list users", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<20} {:<30} {:<16}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Email".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(73).bright_black());

    for user in &users {
        println!(
            "  {:<4} {:<20} {:<30} {}",
            user.id.to_string().bright_black(),
            user.username.cyan(),
            user.email,
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn handle_items_action(action: ItemsAction, pool: &PgPool) -> Result<()> {
    let repo = PgItemRepository::new(Arc::new(pool.clone()));

    match action {
        ItemsAction::List { skip, limit } => {
            println!("{}", "📦 Items".bright_blue().bold());
            println!();

            let items = repo
                .list(skip, limit)
                .await
                .map_err(|e| cli_error("Failed to list items", e))?;
            let total = repo
                .count()
                .await
                .map_err(|e| cli_error("Failed to count items", e))?;

            if items.is_empty() {
                println!("{}", "  No items in this range".yellow());
                println!();
                println!("  Total stored: {}", total.to_string().bright_white());
                return Ok(());
            }

            println!(
                "  {:<6} {:<32} {:>10} {:<8}",
                "ID".bright_white().bold(),
                "Name".bright_white().bold(),
                "Price".bright_white().bold(),
                "Status".bright_white().bold()
            );
            println!("  {}", "─".repeat(60).bright_black());

            for item in &items {
                let status = if item.is_active {
                    "ACTIVE".green()
                } else {
                    "INACTIVE".red()
                };

                println!(
                    "  {:<6} {:<32} {:>10.2} {}",
                    item.id.to_string().bright_black(),
                    item.name.cyan(),
                    item.price,
                    status
                );
            }

            println!();
            println!(
                "  Showing {} of {}",
                items.len().to_string().bright_white().bold(),
                total.to_string().bright_white().bold()
            );
            println!();
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            ping(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let items: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
                .fetch_one(pool)
                .await
                .context("items table missing; run `admin db migrate`")?;
            let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await
                .context("users table missing; run `admin db migrate`")?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Items:      {}", items.to_string().bright_green().bold());
            println!("  Users:      {}", users.to_string().bright_green().bold());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            run_migrations(pool).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
