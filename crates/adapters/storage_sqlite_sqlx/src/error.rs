//! Storage-specific error type wrapping sqlx errors.

use todohub_domain::error::TodoHubError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The database could not be opened or no connection could be acquired.
    #[error("failed to connect to database")]
    Connection(#[source] sqlx::Error),

    /// A query failed or a row could not be decoded.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to ensure the schema.
    #[error("schema initialization error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for TodoHubError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
