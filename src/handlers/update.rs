use crate::error::ApiError;
use crate::handlers::{parse_candidate, require_id};
use crate::item::ItemCandidate;
use crate::models::{ApiResponse, Envelope};
use crate::routes;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
};

/// PUT /api/items/{id} handler - Replace an item's fields
///
/// The body must be a complete, valid item; partial updates are rejected
/// by the same rules as create. Validation runs before the lookup, so an
/// invalid body on an unknown id is a 400, not a 404.
#[utoipa::path(
    put,
    path = routes::ITEM,
    params(
        ("id" = String, Path, description = "Item identifier")
    ),
    request_body = ItemCandidate,
    responses(
        (status = 200, description = "Item updated", body = Envelope),
        (status = 400, description = "Validation failed, malformed body or missing id", body = Envelope),
        (status = 404, description = "Item not found", body = Envelope),
        (status = 500, description = "Storage error", body = Envelope)
    ),
    tag = "items"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<ApiResponse, ApiError> {
    let Path(id) = id?;
    let id = require_id(id)?;
    let body = body?;
    let fields = parse_candidate(&body)?
        .into_fields()
        .map_err(|errors| ApiError::Validation {
            message: "Update validation failed",
            errors,
        })?;

    let mut items = state.store.read_all().await?;
    let Some(item) = items.iter_mut().find(|item| item.id == id) else {
        tracing::info!("Item not found with id: {}", id);
        return Err(ApiError::ItemNotFound(id));
    };

    item.update(&fields.name, fields.price, fields.size);
    let data = serde_json::to_value(&*item)?;
    state.store.write_all(&items).await?;

    tracing::info!("Updated item with id: {}", id);
    Ok(ApiResponse::ok("Item updated successfully", data))
}
