// Route path constants - single source of truth for all API paths

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue},
    middleware,
    routing::{any, get, post},
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::api_doc;
use crate::handlers;
use crate::layers;
use crate::state::AppState;

pub const ROOT: &str = "/";
pub const ITEMS: &str = "/api/items";
pub const ITEM_MISSING_ID: &str = "/api/items/";
pub const ITEM: &str = "/api/items/{id}";
pub const OPENAPI: &str = "/api-docs/openapi.json";

/// Public endpoint table, shown at `/` and logged on startup
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("POST /api/items", "Create a new item"),
    ("GET /api/items", "Get all items"),
    ("GET /api/items/:id", "Get item by ID"),
    ("PUT /api/items/:id", "Update item by ID"),
    ("DELETE /api/items/:id", "Delete item by ID"),
];

/// Build the full application router
///
/// GET routes answer HEAD on their own, so HEAD is pinned to the 405
/// handler. Request bodies are not size limited.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(ROOT, any(handlers::info_handler))
        .route(
            ITEMS,
            post(handlers::create_handler)
                .get(handlers::list_handler)
                .head(handlers::method_not_allowed)
                .fallback(handlers::method_not_allowed),
        )
        .route(ITEM_MISSING_ID, any(handlers::missing_id_handler))
        .route(
            ITEM,
            get(handlers::get_handler)
                .head(handlers::method_not_allowed)
                .put(handlers::update_handler)
                .delete(handlers::delete_handler)
                .fallback(handlers::method_not_allowed),
        )
        .route(OPENAPI, get(api_doc::openapi_handler))
        .fallback(handlers::route_not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(middleware::from_fn(layers::preflight))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(layers::ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(layers::ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(layers::ALLOW_HEADERS),
        ))
        .layer(middleware::from_fn(layers::log_request))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
