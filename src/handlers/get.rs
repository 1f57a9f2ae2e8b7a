use crate::error::ApiError;
use crate::handlers::require_id;
use crate::models::{ApiResponse, Envelope};
use crate::routes;
use crate::state::AppState;
use axum::extract::{rejection::PathRejection, Path, State};

/// GET /api/items/{id} handler - Retrieve one item
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("id" = String, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "Item found", body = Envelope),
        (status = 400, description = "Missing item id", body = Envelope),
        (status = 404, description = "Item not found", body = Envelope),
        (status = 500, description = "Storage error", body = Envelope)
    ),
    tag = "items"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<ApiResponse, ApiError> {
    let Path(id) = id?;
    let id = require_id(id)?;

    let items = state.store.read_all().await?;
    match items.into_iter().find(|item| item.id == id) {
        Some(item) => {
            tracing::debug!("Retrieved item with id: {}", id);
            Ok(ApiResponse::ok(
                "Item retrieved successfully",
                serde_json::to_value(&item)?,
            ))
        }
        None => {
            tracing::info!("Item not found with id: {}", id);
            Err(ApiError::ItemNotFound(id))
        }
    }
}
