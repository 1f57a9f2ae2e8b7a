use axum::{http::StatusCode, response::Response};

use crate::models::{pretty_json, ApiInfo, Endpoints};
use crate::routes;

/// GET / handler - Describe the API surface
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "API description", body = ApiInfo)
    ),
    tag = "info"
)]
pub async fn info_handler() -> Response {
    pretty_json(
        StatusCode::OK,
        &ApiInfo {
            success: true,
            message: "Inventory Management API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints: Endpoints(routes::ENDPOINTS),
            data: None,
        },
    )
}
