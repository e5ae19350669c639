//! `SQLite` implementation of [`TodoRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use todohub_app::ports::TodoRepository;
use todohub_domain::error::TodoHubError;
use todohub_domain::id::TodoId;
use todohub_domain::time::{Timestamp, now};
use todohub_domain::todo::{NewTodo, Todo};

use crate::error::StorageError;
use crate::pool::Database;

/// Wrapper for converting database rows into domain [`Todo`].
struct Wrapper(Todo);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Todo> {
        value.map(|w| w.0)
    }
}

fn parse_timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.to_utc())
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let title: String = row.try_get("title")?;
        let description: Option<String> = row.try_get("description")?;
        let is_completed: bool = row.try_get("is_completed")?;
        let created_at: String = row.try_get("created_at")?;
        let completed_at: Option<String> = row.try_get("completed_at")?;

        Ok(Self(Todo {
            id: TodoId::new(id),
            title,
            description,
            is_completed,
            created_at: parse_timestamp(&created_at)?,
            completed_at: completed_at.as_deref().map(parse_timestamp).transpose()?,
        }))
    }
}

const INSERT: &str = "INSERT INTO todos (title, description, is_completed, created_at, completed_at) VALUES (?, ?, ?, ?, NULL)";
const SELECT_BY_ID: &str = "SELECT * FROM todos WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM todos ORDER BY id";
// A stored completion time is never overwritten nor cleared.
const UPDATE: &str = "UPDATE todos SET title = ?, description = ?, is_completed = ?, completed_at = COALESCE(completed_at, ?) WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM todos WHERE id = ?";

/// `SQLite`-backed todo repository.
///
/// Every operation acquires its own connection from the [`Database`].
pub struct SqliteTodoRepository {
    db: Database,
}

impl SqliteTodoRepository {
    /// Create a new repository using the given database.
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl TodoRepository for SqliteTodoRepository {
    async fn list_all(&self) -> Result<Vec<Todo>, TodoHubError> {
        tracing::debug!("listing todos");
        let mut conn = self.db.acquire().await?;
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&mut *conn)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn get_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoHubError> {
        tracing::debug!(%id, "getting todo");
        let mut conn = self.db.acquire().await?;
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&mut *conn)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn create(&self, todo: NewTodo) -> Result<TodoId, TodoHubError> {
        tracing::debug!(title = %todo.title, "creating todo");
        let mut conn = self.db.acquire().await?;
        let result = sqlx::query(INSERT)
            .bind(&todo.title)
            .bind(&todo.description)
            .bind(todo.is_completed)
            .bind(now().to_rfc3339())
            .execute(&mut *conn)
            .await
            .map_err(StorageError::from)?;

        Ok(TodoId::new(result.last_insert_rowid()))
    }

    async fn update(&self, mut todo: Todo) -> Result<bool, TodoHubError> {
        tracing::debug!(id = %todo.id, "updating todo");
        todo.stamp_completion(now());

        let mut conn = self.db.acquire().await?;
        let result = sqlx::query(UPDATE)
            .bind(&todo.title)
            .bind(&todo.description)
            .bind(todo.is_completed)
            .bind(todo.completed_at.map(|ts| ts.to_rfc3339()))
            .bind(todo.id.get())
            .execute(&mut *conn)
            .await
            .map_err(StorageError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: TodoId) -> Result<bool, TodoHubError> {
        tracing::debug!(%id, "deleting todo");
        let mut conn = self.db.acquire().await?;
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.get())
            .execute(&mut *conn)
            .await
            .map_err(StorageError::from)?;

        Ok(result.rows_affected() > 0)
    }
}
