pub mod info;
pub mod create;
pub mod list;
pub mod get;
pub mod update;
pub mod delete;
pub mod fallback;

pub use info::info_handler;
pub use create::create_handler;
pub use list::list_handler;
pub use get::get_handler;
pub use update::update_handler;
pub use delete::delete_handler;
pub use fallback::{method_not_allowed, missing_id_handler, route_not_found};

use serde_json::Value as JsonValue;

use crate::error::ApiError;
use crate::item::ItemCandidate;

/// Decode a fully-read request body into an item candidate
pub(crate) fn parse_candidate(body: &[u8]) -> Result<ItemCandidate, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::BadRequest("Request body is empty".to_string()));
    }

    let value: JsonValue = serde_json::from_slice(body)
        .map_err(|_| ApiError::BadRequest("Invalid JSON in request body".to_string()))?;

    if !value.is_object() {
        return Err(ApiError::BadRequest("Request body must be a JSON object".to_string()));
    }

    serde_json::from_value(value)
        .map_err(|_| ApiError::BadRequest("Request body must be a JSON object".to_string()))
}

/// Reject ids that are empty after trimming
pub(crate) fn require_id(id: String) -> Result<String, ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::BadRequest("Item ID is required".to_string()));
    }
    Ok(id)
}
