use crate::error::ApiError;
use crate::models::{ApiResponse, Envelope};
use crate::routes;
use crate::state::AppState;
use axum::extract::State;

/// GET /api/items handler - List every item
///
/// Returns the whole collection in insertion order. There is no
/// pagination or filtering.
#[utoipa::path(
    get,
    path = routes::ITEMS,
    responses(
        (status = 200, description = "All items", body = Envelope),
        (status = 500, description = "Storage error", body = Envelope)
    ),
    tag = "items"
)]
pub async fn list_handler(State(state): State<AppState>) -> Result<ApiResponse, ApiError> {
    let items = state.store.read_all().await?;

    tracing::debug!("Listed {} items", items.len());
    Ok(ApiResponse::ok(
        format!("Retrieved {} items successfully", items.len()),
        serde_json::to_value(&items)?,
    ))
}
