//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod todos;

use axum::Router;
use axum::routing::get;

use todohub_app::ports::TodoRepository;

use crate::state::AppState;

/// Path of the todo collection, as seen by clients.
pub const TODOS_PATH: &str = "/api/todo";

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: TodoRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/todo", get(todos::list::<R>).post(todos::create::<R>))
        .route(
            "/todo/{id}",
            get(todos::get::<R>)
                .put(todos::update::<R>)
                .delete(todos::delete::<R>),
        )
}
