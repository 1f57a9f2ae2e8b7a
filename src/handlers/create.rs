use crate::error::ApiError;
use crate::handlers::parse_candidate;
use crate::item::{Item, ItemCandidate};
use crate::models::{ApiResponse, Envelope};
use crate::routes;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
};

/// POST /api/items handler - Create an item
///
/// Validates the body, appends the new item to the stored collection and
/// writes the whole collection back.
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = ItemCandidate,
    responses(
        (status = 201, description = "Item created", body = Envelope),
        (status = 400, description = "Validation failed or malformed body", body = Envelope),
        (status = 500, description = "Storage error", body = Envelope)
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<ApiResponse, ApiError> {
    let body = body?;
    let fields = parse_candidate(&body)?
        .into_fields()
        .map_err(|errors| ApiError::Validation {
            message: "Item validation failed",
            errors,
        })?;

    let mut items = state.store.read_all().await?;
    let item = Item::new(&fields.name, fields.price, fields.size, None);
    items.push(item.clone());
    state.store.write_all(&items).await?;

    tracing::info!("Created item with id: {}", item.id);
    Ok(ApiResponse::created(
        "Item created successfully",
        serde_json::to_value(&item)?,
    ))
}

#[cfg(test)]
mod tests {
    use crate::item::{Item, Size, NAME_EMPTY, NAME_TOO_LONG, PRICE_NOT_POSITIVE, SIZE_INVALID};
    use crate::test_utils::TestApp;
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_create_endpoint_success() {
        let app = TestApp::new();

        let response = app
            .send_json(Method::POST, "/api/items", json!({"name": "Widget", "price": 9.99, "size": "M"}))
            .await;

        assert_eq!(response.status, StatusCode::CREATED);
        let envelope = response.envelope();
        assert!(envelope.success);
        assert_eq!(envelope.message, "Item created successfully");
        assert_eq!(envelope.errors, None);

        let data = envelope.data.unwrap();
        assert_eq!(data["size"], "m");
        assert!(!data["id"].as_str().unwrap().is_empty());
        assert_eq!(data["createdAt"], data["updatedAt"]);

        let item: Item = serde_json::from_value(data).unwrap();
        assert_eq!(item.name, "Widget");
        assert_eq!(item.price, 9.99);
        assert_eq!(app.store.read_all().await.unwrap(), vec![item]);
    }

    #[tokio::test]
    async fn test_create_endpoint_trims_fields() {
        let app = TestApp::new();

        let item = app.create_item(json!({"name": "  Gadget  ", "price": 3, "size": " l "})).await;

        assert_eq!(item.name, "Gadget");
        assert_eq!(item.price, 3.0);
        assert_eq!(item.size, Size::Large);
    }

    #[tokio::test]
    async fn test_create_endpoint_appends() {
        let app = TestApp::new();

        let first = app.create_item(json!({"name": "First", "price": 1, "size": "s"})).await;
        let second = app.create_item(json!({"name": "Second", "price": 2, "size": "m"})).await;

        assert_ne!(first.id, second.id);
        assert_eq!(app.store.read_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_create_endpoint_reports_all_validation_errors() {
        let app = TestApp::new();

        let response = app
            .send_json(Method::POST, "/api/items", json!({"name": "", "price": -1, "size": "xl"}))
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        let envelope = response.envelope();
        assert!(!envelope.success);
        assert_eq!(envelope.message, "Item validation failed");
        assert_eq!(
            envelope.errors,
            Some(vec![
                NAME_EMPTY.to_string(),
                PRICE_NOT_POSITIVE.to_string(),
                SIZE_INVALID.to_string()
            ])
        );
        assert_eq!(envelope.data, None);
        assert!(!app.store.exists().await);
    }

    #[tokio::test]
    async fn test_create_endpoint_empty_body() {
        let app = TestApp::new();

        let response = app.send(Method::POST, "/api/items", Some("   ")).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        let envelope = response.envelope();
        assert_eq!(envelope.message, "Bad request");
        assert_eq!(envelope.errors, Some(vec!["Request body is empty".to_string()]));
    }

    #[tokio::test]
    async fn test_create_endpoint_invalid_json() {
        let app = TestApp::new();

        let response = app.send(Method::POST, "/api/items", Some("{invalid json}")).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.envelope().errors,
            Some(vec!["Invalid JSON in request body".to_string()])
        );
    }

    #[tokio::test]
    async fn test_create_endpoint_storage_failure() {
        let app = TestApp::with_broken_store();

        let response = app
            .send_json(Method::POST, "/api/items", json!({"name": "Widget", "price": 9.99, "size": "m"}))
            .await;

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        let envelope = response.envelope();
        assert_eq!(envelope.message, "Internal server error");
        let errors = envelope.errors.unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Failed to read data file"), "{}", errors[0]);
    }

    #[tokio::test]
    async fn test_create_endpoint_wire_format() {
        let app = TestApp::new();

        let response = app
            .send_json(Method::POST, "/api/items", json!({"name": "W", "price": 3, "size": "s"}))
            .await;

        assert_eq!(response.status, StatusCode::CREATED);
        let text = std::str::from_utf8(&response.body).unwrap();
        let keys = [
            "\"success\"",
            "\"message\"",
            "\"errors\"",
            "\"data\"",
            "\"id\"",
            "\"name\"",
            "\"price\"",
            "\"size\"",
            "\"createdAt\"",
            "\"updatedAt\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| text.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{text}");
        assert!(text.contains("\"price\": 3,"), "{text}");
    }

    #[tokio::test]
    async fn test_create_endpoint_accepts_large_bodies() {
        let app = TestApp::new();
        let name = "x".repeat(3 * 1024 * 1024);

        let response = app
            .send_json(Method::POST, "/api/items", json!({"name": name, "price": 1, "size": "s"}))
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.header("content-type"), Some("application/json"));
        let envelope = response.envelope();
        assert_eq!(envelope.message, "Item validation failed");
        assert_eq!(envelope.errors, Some(vec![NAME_TOO_LONG.to_string()]));
    }
}
