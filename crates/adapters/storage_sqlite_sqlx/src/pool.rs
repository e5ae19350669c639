//! `SQLite` connection pool setup and per-operation connection access.

use std::str::FromStr;

use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool};

use crate::error::StorageError;
use crate::schema;

/// Configuration for the `SQLite` storage adapter.
#[derive(Debug, Clone)]
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:todohub.db` or `sqlite::memory:`).
    pub database_url: String,
}

impl Config {
    /// Configuration for a private in-memory database.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
        }
    }

    /// Build a [`Database`] from this configuration.
    ///
    /// Creates the connection pool, creates the database file if missing,
    /// and ensures the schema exists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or the schema setup fails.
    pub async fn build(self) -> Result<Database, StorageError> {
        Database::initialize(&self.database_url).await
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Every connection to an in-memory database opens a fresh, empty one,
/// so those pools are pinned to a single connection that never expires.
fn pool_options(database_url: &str) -> SqlitePoolOptions {
    let options = SqlitePoolOptions::new();
    if is_in_memory(database_url) {
        options
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        options
    }
}

/// Holds the `SQLite` connection pool and hands out scoped connections.
///
/// Read-only after construction; cloning shares the same pool.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the database and ensure the schema.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or the schema setup fails.
    async fn initialize(database_url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(StorageError::Connection)?
            .create_if_missing(true);

        let pool = pool_options(database_url)
            .connect_with(options)
            .await
            .map_err(StorageError::Connection)?;

        schema::initialize(&pool).await?;
        tracing::debug!(database_url, "database ready");

        Ok(Self { pool })
    }

    /// Acquire a connection for a single operation.
    ///
    /// The connection goes back to the pool when dropped, whichever way the
    /// operation ends.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Connection`] if no connection can be obtained.
    pub async fn acquire(&self) -> Result<PoolConnection<Sqlite>, StorageError> {
        self.pool.acquire().await.map_err(StorageError::Connection)
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
