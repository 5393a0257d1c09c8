//! Normalized Figshare responses

use serde_json::Value as JsonValue;

/// Body of a successful response
///
/// Figshare answers metadata calls with JSON, but file downloads and some
/// empty acknowledgements are not JSON; those are kept as raw bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Json(JsonValue),
    Raw(Vec<u8>),
}

impl ApiResponse {
    /// Classify a response body, preferring JSON
    pub fn from_body(body: Vec<u8>) -> Self {
        match serde_json::from_slice::<JsonValue>(&body) {
            Ok(json) => ApiResponse::Json(json),
            Err(_) => ApiResponse::Raw(body),
        }
    }

    pub fn as_json(&self) -> Option<&JsonValue> {
        match self {
            ApiResponse::Json(json) => Some(json),
            ApiResponse::Raw(_) => None,
        }
    }

    pub fn into_json(self) -> Option<JsonValue> {
        match self {
            ApiResponse::Json(json) => Some(json),
            ApiResponse::Raw(_) => None,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, ApiResponse::Raw(_))
    }
}
