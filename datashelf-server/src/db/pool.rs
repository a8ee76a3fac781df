//! Database connection pool management
//!
//! Uses an sqlx SqlitePool with explicit connection limits. The database
//! file is created on first open.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
/// Kept low for single-user tooling.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a SQLite connection pool for a file-backed database.
///
/// The file is created if it does not exist yet.
///
/// # Errors
///
/// Returns an error if the database file cannot be opened.
pub async fn create_pool(database_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(database_path, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a SQLite connection pool with a custom connection limit.
pub async fn create_pool_with_options(
    database_path: &Path,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Create an in-memory SQLite pool.
///
/// Limited to a single connection so every caller sees the same database.
/// Idle timeout and max lifetime are disabled: recycling the sole
/// connection would discard the database.
pub async fn create_pool_in_memory() -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}
