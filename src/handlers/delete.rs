use crate::error::ApiError;
use crate::handlers::require_id;
use crate::models::{ApiResponse, Envelope};
use crate::routes;
use crate::state::AppState;
use axum::extract::{rejection::PathRejection, Path, State};

/// DELETE /api/items/{id} handler - Remove an item and return it
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("id" = String, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "Item deleted", body = Envelope),
        (status = 400, description = "Missing item id", body = Envelope),
        (status = 404, description = "Item not found", body = Envelope),
        (status = 500, description = "Storage error", body = Envelope)
    ),
    tag = "items"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<ApiResponse, ApiError> {
    let Path(id) = id?;
    let id = require_id(id)?;

    let mut items = state.store.read_all().await?;
    let Some(index) = items.iter().position(|item| item.id == id) else {
        tracing::info!("Item not found with id: {}", id);
        return Err(ApiError::ItemNotFound(id));
    };

    let removed = items.remove(index);
    state.store.write_all(&items).await?;

    tracing::info!("Deleted item with id: {}", id);
    Ok(ApiResponse::ok(
        "Item deleted successfully",
        serde_json::to_value(&removed)?,
    ))
}
