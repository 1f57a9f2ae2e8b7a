use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use serde_json::Value as JsonValue;

/// Uniform response wrapper for every API endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    pub errors: Option<Vec<String>>,
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
}

impl Envelope {
    pub fn success(message: impl Into<String>, data: JsonValue) -> Self {
        Self {
            success: true,
            message: message.into(),
            errors: None,
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: Some(errors),
            data: None,
        }
    }
}

/// An envelope paired with the status it is sent with
pub struct ApiResponse {
    pub status: StatusCode,
    pub envelope: Envelope,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>, data: JsonValue) -> Self {
        Self {
            status: StatusCode::OK,
            envelope: Envelope::success(message, data),
        }
    }

    pub fn created(message: impl Into<String>, data: JsonValue) -> Self {
        Self {
            status: StatusCode::CREATED,
            envelope: Envelope::success(message, data),
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        pretty_json(self.status, &self.envelope)
    }
}

/// Serialize `value` as indented JSON with an `application/json` content type
pub fn pretty_json<T: Serialize>(status: StatusCode, value: &T) -> Response {
    match serde_json::to_string_pretty(value) {
        Ok(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(err) => {
            tracing::error!("Failed to serialize response body: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Ordered `"METHOD path": description` table, serialized as a JSON object
pub struct Endpoints(pub &'static [(&'static str, &'static str)]);

impl Serialize for Endpoints {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (route, description) in self.0 {
            map.serialize_entry(route, description)?;
        }
        map.end()
    }
}

/// Response type for the API description at `/`
#[derive(Serialize, utoipa::ToSchema)]
pub struct ApiInfo {
    pub success: bool,
    pub message: String,
    pub version: String,
    #[schema(value_type = Object)]
    pub endpoints: Endpoints,
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
}
