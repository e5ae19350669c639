//! JSON REST handlers for todos.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use todohub_app::ports::TodoRepository;
use todohub_domain::error::{TodoHubError, ValidationError};
use todohub_domain::id::TodoId;
use todohub_domain::time::Timestamp;
use todohub_domain::todo::{NewTodo, Todo, TodoUpdate};

use super::TODOS_PATH;
use crate::error::{ApiError, ErrorBody};
use crate::state::AppState;

/// Request body for creating or replacing a todo.
///
/// `id` is ignored on create and must match the path on update.
/// `createdAt` and `completedAt` are never read from clients.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoRequest {
    #[schema(value_type = Option<i64>)]
    pub id: Option<TodoId>,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
}

impl From<TodoRequest> for NewTodo {
    fn from(req: TodoRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            is_completed: req.is_completed,
        }
    }
}

impl From<TodoRequest> for TodoUpdate {
    fn from(req: TodoRequest) -> Self {
        Self {
            id: req.id,
            title: req.title,
            description: req.description,
            is_completed: req.is_completed,
        }
    }
}

/// A todo as returned to clients.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = Todo)]
pub struct TodoResource {
    #[schema(value_type = i64)]
    pub id: TodoId,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    /// Set the first time the todo is completed; never cleared.
    #[schema(value_type = Option<String>, format = DateTime)]
    pub completed_at: Option<Timestamp>,
}

impl From<Todo> for TodoResource {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            description: todo.description,
            is_completed: todo.is_completed,
            created_at: todo.created_at,
            completed_at: todo.completed_at,
        }
    }
}

fn parse_id(id: &str) -> Result<TodoId, ApiError> {
    TodoId::from_str(id)
        .map_err(|_| ApiError::from(TodoHubError::from(ValidationError::InvalidId(id.to_string()))))
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<TodoResource>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<TodoResource>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    /// The stored todo, along with the path it can be fetched from.
    Created {
        location: String,
        todo: Json<TodoResource>,
    },
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created { location, todo } => {
                (StatusCode::CREATED, [(header::LOCATION, location)], todo).into_response()
            }
        }
    }
}

/// Possible responses from the update and delete endpoints.
pub enum NoContentResponse {
    NoContent,
}

impl IntoResponse for NoContentResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/todo`
#[utoipa::path(
    get,
    path = "/api/todo",
    tag = "todo",
    responses(
        (status = 200, description = "All todos in creation order", body = [TodoResource]),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let todos = state.todo_service.list_todos().await?;
    Ok(ListResponse::Ok(Json(
        todos.into_iter().map(TodoResource::from).collect(),
    )))
}

/// `GET /api/todo/:id`
#[utoipa::path(
    get,
    path = "/api/todo/{id}",
    tag = "todo",
    params(("id" = i64, Path, description = "Todo id")),
    responses(
        (status = 200, description = "The todo", body = TodoResource),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No todo with this id", body = ErrorBody),
    )
)]
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let todo_id = parse_id(&id)?;
    let todo = state.todo_service.get_todo(todo_id).await?;
    Ok(GetResponse::Ok(Json(todo.into())))
}

/// `POST /api/todo`
#[utoipa::path(
    post,
    path = "/api/todo",
    tag = "todo",
    request_body = TodoRequest,
    responses(
        (status = 201, description = "The stored todo", body = TodoResource,
            headers(("Location" = String, description = "Path of the new todo"))),
        (status = 400, description = "Missing or blank title", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Json(req): Json<TodoRequest>,
) -> Result<CreateResponse, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let created = state.todo_service.create_todo(req.into()).await?;
    Ok(CreateResponse::Created {
        location: format!("{TODOS_PATH}/{}", created.id),
        todo: Json(created.into()),
    })
}

/// `PUT /api/todo/:id`
#[utoipa::path(
    put,
    path = "/api/todo/{id}",
    tag = "todo",
    params(("id" = i64, Path, description = "Todo id; must match the body id")),
    request_body = TodoRequest,
    responses(
        (status = 204, description = "Todo replaced"),
        (status = 400, description = "Id mismatch or blank title", body = ErrorBody),
        (status = 404, description = "No todo with this id", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    Json(req): Json<TodoRequest>,
) -> Result<NoContentResponse, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let todo_id = parse_id(&id)?;
    state.todo_service.update_todo(todo_id, req.into()).await?;
    Ok(NoContentResponse::NoContent)
}

/// `DELETE /api/todo/:id`
#[utoipa::path(
    delete,
    path = "/api/todo/{id}",
    tag = "todo",
    params(("id" = i64, Path, description = "Todo id")),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 404, description = "No todo with this id", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<NoContentResponse, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let todo_id = parse_id(&id)?;
    state.todo_service.delete_todo(todo_id).await?;
    Ok(NoContentResponse::NoContent)
}
