//! # Presence DB
//!
//! Database pool initialization, embedded migrations and the mapping from
//! `sqlx` errors onto the application error taxonomy.
//!
//! # Example
//!
//! ```ignore
//! use presence_config::DatabaseConfig;
//! use presence_db::{init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//! run_migrations(&pool).await?;
//! ```

use presence_config::DatabaseConfig;
use presence_core::AppError;
use sqlx::postgres::PgPoolOptions;
use tracing::{error, info, warn};

pub use sqlx::PgPool;

/// Connects a PostgreSQL pool using the configured URL.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    info!(max_connections = config.max_connections, "Database pool ready");
    Ok(pool)
}

/// Applies the migrations embedded from the workspace `migrations/` folder.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}

/// Maps a write failure onto [`AppError`].
///
/// `duplicate_message` is the notice shown when a unique constraint fails
/// (it names the conflicting field category). A foreign key failure means
/// the submitted parent does not exist.
pub fn classify(err: sqlx::Error, duplicate_message: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            warn!(constraint = ?db_err.constraint(), "Unique constraint violated");
            return AppError::duplicate_key(duplicate_message);
        }
        if db_err.is_foreign_key_violation() {
            warn!(constraint = ?db_err.constraint(), "Foreign key constraint violated");
            return AppError::validation(foreign_key_message(db_err.constraint()));
        }
    }
    error!(error = %err, "Database error");
    AppError::persistence(err)
}

/// Maps a failed `DELETE` onto [`AppError`]. A foreign key failure here
/// means a row still references the record, which `in_use_message` names.
pub fn classify_delete(err: sqlx::Error, in_use_message: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() {
            warn!(constraint = ?db_err.constraint(), "Delete blocked by a referencing row");
            return AppError::referential_integrity(in_use_message);
        }
    }
    storage_error(err)
}

/// Wraps a failure that cannot be a constraint violation (reads,
/// transaction begin).
pub fn storage_error(err: sqlx::Error) -> AppError {
    error!(error = %err, "Database operation failed");
    AppError::persistence(err)
}

fn foreign_key_message(constraint: Option<&str>) -> &'static str {
    match constraint {
        Some(name) if name.contains("department") => "The selected department does not exist",
        Some(name) if name.contains("program") => "The selected program does not exist",
        _ => "A referenced record does not exist",
    }
}
