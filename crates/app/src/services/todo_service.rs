//! Todo service — use-cases for managing todos.

use todohub_domain::error::{NotFoundError, PersistenceError, TodoHubError, ValidationError};
use todohub_domain::id::TodoId;
use todohub_domain::todo::{NewTodo, Todo, TodoUpdate};

use crate::ports::TodoRepository;

const ENTITY: &str = "Todo";

fn not_found(id: TodoId) -> TodoHubError {
    NotFoundError {
        entity: ENTITY,
        id: id.to_string(),
    }
    .into()
}

fn persistence_failure(operation: &'static str, id: TodoId) -> TodoHubError {
    PersistenceError {
        operation,
        entity: ENTITY,
        id: id.to_string(),
    }
    .into()
}

/// Application service for todo CRUD operations.
pub struct TodoService<R> {
    repo: R,
}

impl<R: TodoRepository> TodoService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all todos.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_todos(&self) -> Result<Vec<Todo>, TodoHubError> {
        self.repo.list_all().await
    }

    /// Look up a todo by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`TodoHubError::NotFound`] when no todo with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_todo(&self, id: TodoId) -> Result<Todo, TodoHubError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(%id, "todo not found");
            not_found(id)
        })
    }

    /// Create a new todo and return it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`TodoHubError::Validation`] if the title is blank, or a
    /// storage error from the repository.
    pub async fn create_todo(&self, todo: NewTodo) -> Result<Todo, TodoHubError> {
        todo.validate()?;
        let id = self.repo.create(todo).await?;
        tracing::info!(%id, "created todo");
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| persistence_failure("create", id))
    }

    /// Replace the mutable fields of the todo at `id`.
    ///
    /// The repository is not touched when the identifiers disagree.
    ///
    /// # Errors
    ///
    /// Returns [`TodoHubError::Validation`] on an id mismatch or a blank
    /// title, [`TodoHubError::NotFound`] when the todo does not exist,
    /// [`TodoHubError::Persistence`] when the store applied no change, or a
    /// storage error from the repository.
    pub async fn update_todo(&self, id: TodoId, update: TodoUpdate) -> Result<(), TodoHubError> {
        if update.id != Some(id) {
            tracing::warn!(path_id = %id, body_id = ?update.id, "todo id mismatch");
            return Err(ValidationError::IdMismatch {
                path: id.to_string(),
                body: update
                    .id
                    .map_or_else(|| "none".to_string(), |id| id.to_string()),
            }
            .into());
        }
        update.validate()?;

        let Some(existing) = self.repo.get_by_id(id).await? else {
            tracing::warn!(%id, "todo not found for update");
            return Err(not_found(id));
        };

        if !self.repo.update(existing.apply(update)).await? {
            tracing::error!(%id, "failed to update todo");
            return Err(persistence_failure("update", id));
        }
        Ok(())
    }

    /// Delete the todo at `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoHubError::NotFound`] when the todo does not exist,
    /// [`TodoHubError::Persistence`] when the store removed nothing, or a
    /// storage error from the repository.
    pub async fn delete_todo(&self, id: TodoId) -> Result<(), TodoHubError> {
        if self.repo.get_by_id(id).await?.is_none() {
            tracing::warn!(%id, "todo not found for deletion");
            return Err(not_found(id));
        }

        if !self.repo.delete(id).await? {
            tracing::error!(%id, "failed to delete todo");
            return Err(persistence_failure("delete", id));
        }
        tracing::info!(%id, "deleted todo");
        Ok(())
    }
}
