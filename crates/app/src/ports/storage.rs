//! Storage port — the todo store.

use std::future::Future;

use todohub_domain::error::TodoHubError;
use todohub_domain::id::TodoId;
use todohub_domain::todo::{NewTodo, Todo};

/// Repository for persisting and querying [`Todo`]s.
///
/// Implementations own the lifecycle stamping: `created_at` on
/// [`create`](Self::create), `completed_at` on [`update`](Self::update).
/// Absence is never an error: lookups return `None` and writes against a
/// missing id return `false`.
pub trait TodoRepository {
    /// Get every todo in insertion order.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Todo>, TodoHubError>> + Send;

    /// Get a todo by its identifier.
    fn get_by_id(
        &self,
        id: TodoId,
    ) -> impl Future<Output = Result<Option<Todo>, TodoHubError>> + Send;

    /// Insert a new todo, stamping `created_at`, and return the assigned id.
    fn create(&self, todo: NewTodo) -> impl Future<Output = Result<TodoId, TodoHubError>> + Send;

    /// Overwrite title, description, completion flag and completion time of
    /// the todo with the same id. Returns `true` iff a row was affected.
    fn update(&self, todo: Todo) -> impl Future<Output = Result<bool, TodoHubError>> + Send;

    /// Delete a todo. Returns `true` iff a row was affected.
    fn delete(&self, id: TodoId) -> impl Future<Output = Result<bool, TodoHubError>> + Send;
}
