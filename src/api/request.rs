//! Single-request executor shared by every Figshare call

use super::{ApiError, Result};
use crate::models::ApiResponse;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::{debug, error};

/// User agent sent on every request
const USER_AGENT: &str = concat!("figshare-rs/", env!("CARGO_PKG_VERSION"));

/// Payload of a request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Serialized to JSON text before sending
    Json(JsonValue),
    /// Sent unchanged
    Binary(Vec<u8>),
}

impl RequestBody {
    pub fn json<T: Serialize>(data: &T) -> Result<Self> {
        Ok(RequestBody::Json(serde_json::to_value(data)?))
    }

    fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            RequestBody::Json(value) => Ok(serde_json::to_vec(&value)?),
            RequestBody::Binary(bytes) => Ok(bytes),
        }
    }
}

/// Issues one HTTP request and normalizes the answer
#[derive(Debug, Clone)]
pub struct RequestExecutor {
    http_client: Client,
}

impl RequestExecutor {
    pub fn new() -> Result<Self> {
        let http_client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(http_client))
    }

    /// Use an already configured reqwest client
    pub fn with_client(http_client: Client) -> Self {
        Self { http_client }
    }

    /// Send a request and return its body as JSON, or raw bytes when the body
    /// is not JSON.
    ///
    /// A 4xx or 5xx status is logged with the response body and returned as
    /// [`ApiError::Request`].
    pub async fn issue_request(
        &self,
        method: Method,
        url: &str,
        headers: HeaderMap,
        body: Option<RequestBody>,
    ) -> Result<ApiResponse> {
        debug!(method = %method, url = url, "Sending request to Figshare");

        let mut request = self.http_client.request(method, url).headers(headers);
        if let Some(body) = body {
            request = request.body(body.into_bytes()?);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_client_error() || status.is_server_error() {
            // A body that fails to arrive still reports the status
            let body = response.text().await.unwrap_or_default();
            error!(
                status = %status,
                url = url,
                body = %body,
                "Caught an HTTP error from Figshare"
            );
            return Err(ApiError::Request { status, body });
        }

        let bytes = response.bytes().await?;
        Ok(ApiResponse::from_body(bytes.to_vec()))
    }
}
