//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`TodoHubError`] via `From` when crossing a port boundary.

use std::error::Error as StdError;

/// Top-level error shared by every layer.
#[derive(Debug, thiserror::Error)]
pub enum TodoHubError {
    /// Client-supplied data is inconsistent or invalid.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The targeted record does not exist.
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// The store failed to apply a change to a record known to exist.
    #[error("{0}")]
    Persistence(#[from] PersistenceError),

    /// A lower-level storage failure (connection, query, decoding).
    #[error("storage error")]
    Storage(#[source] Box<dyn StdError + Send + Sync>),
}

/// Reasons a todo (or a request about one) is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The title is missing or blank.
    #[error("title must not be empty")]
    EmptyTitle,

    /// The identifier could not be parsed.
    #[error("invalid id {0:?}")]
    InvalidId(String),

    /// The identifier in the path and the one in the body disagree.
    #[error("id mismatch: path has {path}, body has {body}")]
    IdMismatch {
        /// Identifier taken from the request path.
        path: String,
        /// Identifier taken from the request body, if any.
        body: String,
    },
}

/// A lookup targeted a record that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up (e.g. `"Todo"`).
    pub entity: &'static str,
    /// Identifier that was looked up.
    pub id: String,
}

/// A write affected no rows although its target was confirmed to exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to {operation} {entity} {id}")]
pub struct PersistenceError {
    /// Operation that did not apply (`"update"`, `"delete"`).
    pub operation: &'static str,
    /// Kind of record targeted.
    pub entity: &'static str,
    /// Identifier of the record targeted.
    pub id: String,
}
