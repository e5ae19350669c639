//! Todo — a task with a title, an optional description, and a completion state.
//!
//! Lifecycle:
//! - created from a [`NewTodo`]; storage assigns the [`TodoId`] and
//!   `created_at` is stamped once, at the creation instant
//! - mutated through a [`TodoUpdate`]; `completed_at` is stamped the first
//!   time the todo is completed and is never cleared or moved afterwards
//! - removed with a hard delete

use serde::{Deserialize, Serialize};

use crate::error::{TodoHubError, ValidationError};
use crate::id::TodoId;
use crate::time::Timestamp;

/// A persisted todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub created_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

impl Todo {
    /// Create a builder for constructing a [`Todo`].
    #[must_use]
    pub fn builder() -> TodoBuilder {
        TodoBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TodoHubError::Validation`] when `title` is blank.
    pub fn validate(&self) -> Result<(), TodoHubError> {
        validate_title(&self.title)
    }

    /// Stamp `completed_at` if the todo is completed and has never been
    /// completed before. The stamp is never earlier than `created_at`.
    pub fn stamp_completion(&mut self, at: Timestamp) {
        if self.is_completed && self.completed_at.is_none() {
            self.completed_at = Some(at.max(self.created_at));
        }
    }

    /// Merge client-supplied changes into this todo.
    ///
    /// `id`, `created_at` and `completed_at` are kept; only the store stamps
    /// a completion time.
    #[must_use]
    pub fn apply(mut self, update: TodoUpdate) -> Self {
        self.title = update.title;
        self.description = update.description;
        self.is_completed = update.is_completed;
        self
    }
}

/// Data required to create a todo. The identifier and `created_at` are
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
}

impl NewTodo {
    /// Create a draft with the given title, not completed, no description.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            is_completed: false,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TodoHubError::Validation`] when `title` is blank.
    pub fn validate(&self) -> Result<(), TodoHubError> {
        validate_title(&self.title)
    }
}

/// Full replacement of the mutable fields of a todo.
///
/// `id` is the identifier the client claims to update; it must match the
/// targeted todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoUpdate {
    pub id: Option<TodoId>,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
}

impl TodoUpdate {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TodoHubError::Validation`] when `title` is blank.
    pub fn validate(&self) -> Result<(), TodoHubError> {
        validate_title(&self.title)
    }
}

impl From<Todo> for TodoUpdate {
    fn from(todo: Todo) -> Self {
        Self {
            id: Some(todo.id),
            title: todo.title,
            description: todo.description,
            is_completed: todo.is_completed,
        }
    }
}

fn validate_title(title: &str) -> Result<(), TodoHubError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle.into());
    }
    Ok(())
}

/// Step-by-step builder for [`Todo`].
#[derive(Debug, Default)]
pub struct TodoBuilder {
    id: Option<TodoId>,
    title: Option<String>,
    description: Option<String>,
    is_completed: bool,
    created_at: Option<Timestamp>,
    completed_at: Option<Timestamp>,
}

impl TodoBuilder {
    #[must_use]
    pub fn id(mut self, id: TodoId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn is_completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    #[must_use]
    pub fn completed_at(mut self, completed_at: Timestamp) -> Self {
        self.completed_at = Some(completed_at);
        self
    }

    /// Consume the builder, validate, and return a [`Todo`].
    ///
    /// Missing `id` defaults to `0` and missing `created_at` to now.
    ///
    /// # Errors
    ///
    /// Returns [`TodoHubError::Validation`] if `title` is missing or blank.
    pub fn build(self) -> Result<Todo, TodoHubError> {
        let todo = Todo {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            description: self.description,
            is_completed: self.is_completed,
            created_at: self.created_at.unwrap_or_else(crate::time::now),
            completed_at: self.completed_at,
        };
        todo.validate()?;
        Ok(todo)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn created() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap()
    }

    fn todo() -> Todo {
        Todo::builder()
            .id(TodoId::new(1))
            .title("Buy milk")
            .created_at(created())
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_valid_todo_when_title_provided() {
        let todo = todo();
        assert_eq!(todo.title, "Buy milk");
        assert!(todo.description.is_none());
        assert!(!todo.is_completed);
        assert!(todo.completed_at.is_none());
    }

    #[test]
    fn should_return_validation_error_when_title_is_blank() {
        let result = Todo::builder().title("   ").build();
        assert!(matches!(
            result,
            Err(TodoHubError::Validation(ValidationError::EmptyTitle))
        ));
    }

    #[test]
    fn should_reject_new_todo_without_title() {
        assert!(NewTodo::new("").validate().is_err());
        assert!(NewTodo::new("X").validate().is_ok());
    }

    #[test]
    fn should_stamp_completion_when_completed_for_the_first_time() {
        let mut todo = todo();
        todo.is_completed = true;
        let at = created() + Duration::hours(1);

        todo.stamp_completion(at);
        assert_eq!(todo.completed_at, Some(at));
    }

    #[test]
    fn should_not_restamp_completion_when_already_completed() {
        let first = created() + Duration::hours(1);
        let mut todo = todo();
        todo.is_completed = true;
        todo.completed_at = Some(first);

        todo.stamp_completion(first + Duration::hours(1));
        assert_eq!(todo.completed_at, Some(first));
    }

    #[test]
    fn should_not_stamp_completion_when_not_completed() {
        let mut todo = todo();
        todo.stamp_completion(created() + Duration::hours(1));
        assert!(todo.completed_at.is_none());
    }

    #[test]
    fn should_never_stamp_completion_before_creation() {
        let mut todo = todo();
        todo.is_completed = true;
        todo.stamp_completion(created() - Duration::hours(1));
        assert_eq!(todo.completed_at, Some(created()));
    }

    #[test]
    fn should_keep_identity_and_creation_time_when_applying_update() {
        let original = todo();
        let updated = original.clone().apply(TodoUpdate {
            id: Some(TodoId::new(1)),
            title: "Buy oat milk".to_string(),
            description: Some("the barista one".to_string()),
            is_completed: true,
        });

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.title, "Buy oat milk");
        assert!(updated.is_completed);
    }

    #[test]
    fn should_keep_existing_completion_time_when_applying_update() {
        let first = created() + Duration::hours(1);
        let mut original = todo();
        original.is_completed = true;
        original.completed_at = Some(first);

        let mut update = TodoUpdate::from(original.clone());
        update.is_completed = false;
        let updated = original.apply(update);

        assert!(!updated.is_completed);
        assert_eq!(updated.completed_at, Some(first));
    }

    #[test]
    fn should_leave_completion_unset_when_applying_completed_update() {
        let updated = todo().apply(TodoUpdate {
            id: Some(TodoId::new(1)),
            title: "Buy milk".to_string(),
            description: None,
            is_completed: true,
        });

        assert!(updated.is_completed);
        assert!(updated.completed_at.is_none());
    }

    #[test]
    fn should_serialize_with_camel_case_fields() {
        let json = serde_json::to_value(todo()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Buy milk");
        assert_eq!(json["description"], serde_json::Value::Null);
        assert_eq!(json["isCompleted"], false);
        assert_eq!(json["createdAt"], "2024-01-01T08:00:00Z");
        assert_eq!(json["completedAt"], serde_json::Value::Null);
    }
}
