use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Method fallback for matched item routes
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method,
        path: uri.path().to_string(),
    }
}

/// `/api/items/` with nothing after the slash
pub async fn missing_id_handler() -> ApiError {
    ApiError::BadRequest("Item ID is required".to_string())
}

/// Router fallback for unrecognized paths
pub async fn route_not_found(uri: Uri) -> ApiError {
    tracing::debug!("No route for {}", uri.path());
    ApiError::RouteNotFound(uri.path().to_string())
}
