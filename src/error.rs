use axum::{
    extract::rejection::{BytesRejection, PathRejection},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};

use crate::models::{ApiResponse, Envelope};

/// Custom error type for API endpoints
///
/// Each variant maps to a status code and a failure envelope. Everything
/// unexpected (storage I/O, serialization) collapses into `Internal`, which
/// is logged and reported with its message text.
#[derive(Debug)]
pub enum ApiError {
    /// Candidate item failed one or more field rules
    Validation {
        message: &'static str,
        errors: Vec<String>,
    },
    /// No item with the given id
    ItemNotFound(String),
    /// Malformed request shape (missing id, unreadable body)
    BadRequest(String),
    /// Path matched but the verb is not served there
    MethodNotAllowed { method: Method, path: String },
    /// Path not recognized
    RouteNotFound(String),
    /// Anything else
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            ApiError::Validation { message, errors } => (StatusCode::BAD_REQUEST, message, errors),
            ApiError::ItemNotFound(id) => (
                StatusCode::NOT_FOUND,
                "Item not found",
                vec![format!("No item found with ID: {}", id)],
            ),
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, "Bad request", vec![reason]),
            ApiError::MethodNotAllowed { method, path } => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed",
                vec![format!("{} method is not supported for {}", method, path)],
            ),
            ApiError::RouteNotFound(path) => (
                StatusCode::NOT_FOUND,
                "API endpoint not found",
                vec![format!("The endpoint '{}' does not exist", path)],
            ),
            ApiError::Internal(err) => {
                tracing::error!("Internal server error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    vec![format!("{:#}", err)],
                )
            }
        };

        ApiResponse {
            status,
            envelope: Envelope::failure(message, errors),
        }
        .into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(err.into())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
