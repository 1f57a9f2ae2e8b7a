//! Shared fixtures for handler and store tests.

use std::path::{Path, PathBuf};

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value as JsonValue;
use tower::ServiceExt;
use uuid::Uuid;

use crate::item::Item;
use crate::models::Envelope;
use crate::routes;
use crate::state::AppState;
use crate::store::FileStore;

/// Unique scratch directory, removed on drop
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!("inventory-api-test-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// Full application router over a private data file
pub struct TestApp {
    pub router: Router,
    pub store: FileStore,
    _dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let dir = TempDir::new();
        Self::with_store(FileStore::new(dir.path().join("items.json")), dir)
    }

    /// Store path points at a directory, so every read fails
    pub fn with_broken_store() -> Self {
        let dir = TempDir::new();
        Self::with_store(FileStore::new(dir.path()), dir)
    }

    fn with_store(store: FileStore, dir: TempDir) -> Self {
        let router = routes::app(AppState {
            store: store.clone(),
        });
        Self {
            router,
            store,
            _dir: dir,
        }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
        let body = body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty);
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn send_json(&self, method: Method, uri: &str, body: JsonValue) -> TestResponse {
        self.send(method, uri, Some(&body.to_string())).await
    }

    /// POST an item that is expected to be valid and return it
    pub async fn create_item(&self, body: JsonValue) -> Item {
        let response = self.send_json(Method::POST, routes::ITEMS, body).await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.item()
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn envelope(&self) -> Envelope {
        serde_json::from_slice(&self.body).unwrap()
    }

    /// The envelope's `data` decoded as a single item
    pub fn item(&self) -> Item {
        serde_json::from_value(self.envelope().data.unwrap()).unwrap()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
