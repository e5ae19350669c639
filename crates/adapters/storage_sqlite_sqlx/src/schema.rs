//! Schema initialization.
//!
//! The `todos` table is created by an embedded migration using
//! `CREATE TABLE IF NOT EXISTS`. Applied migrations are recorded, so running
//! the initializer again is a no-op.

use sqlx::SqlitePool;

use crate::error::StorageError;

/// Create the `todos` table if it does not exist yet.
///
/// # Errors
///
/// Returns [`StorageError::Migration`] if the schema cannot be ensured.
pub async fn initialize(pool: &SqlitePool) -> Result<(), StorageError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("database schema initialized");
    Ok(())
}
