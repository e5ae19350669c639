//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use todohub_domain::error::TodoHubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Maps [`TodoHubError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(TodoHubError);

impl From<TodoHubError> for ApiError {
    fn from(err: TodoHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            TodoHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            TodoHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            TodoHubError::Persistence(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            TodoHubError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
