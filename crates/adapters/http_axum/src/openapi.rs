//! OpenAPI description of the todo API, served as JSON next to `/health`.

use axum::Json;
use utoipa::OpenApi;

use crate::api::todos;
use crate::error::ErrorBody;

/// Path the OpenAPI document is served from.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "todohub", description = "CRUD API for todo items"),
    paths(todos::list, todos::get, todos::create, todos::update, todos::delete),
    components(schemas(todos::TodoResource, todos::TodoRequest, ErrorBody)),
    tags((name = "todo", description = "Todo items"))
)]
pub struct ApiDoc;

/// `GET /api-docs/openapi.json`
pub async fn document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
