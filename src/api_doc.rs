use axum::Json;
use utoipa::OpenApi;

use crate::handlers;
use crate::item::{Item, ItemCandidate, Size};
use crate::models::{ApiInfo, Envelope};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "inventory-api",
        version = "1.0.0",
        description = "Inventory item CRUD backed by a single JSON file"
    ),
    paths(
        handlers::info::info_handler,
        handlers::create::create_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Envelope,
            ApiInfo,
            Item,
            ItemCandidate,
            Size
        )
    ),
    tags(
        (name = "info", description = "API description"),
        (name = "items", description = "Inventory item operations")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json handler
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
