//! # todohub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `todohub-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle and hand out scoped
//!   connections, one per operation
//! - Ensure the schema exists before any operation runs (embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `todohub-app` (for port traits) and `todohub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod pool;
pub mod schema;
mod todo_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use todo_repo::SqliteTodoRepository;
