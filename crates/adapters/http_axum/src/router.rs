//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use todohub_app::ports::TodoRepository;

use crate::openapi::{self, OPENAPI_PATH};
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` next to a `/health` check and the OpenAPI
/// document.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: TodoRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route(OPENAPI_PATH, get(openapi::document))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
