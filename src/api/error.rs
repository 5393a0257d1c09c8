use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The service answered with a 4xx or 5xx status.
    #[error("Request failed with status {status}: {body}")]
    Request { status: StatusCode, body: String },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid value for attribute '{field}': {source}")]
    InvalidAttribute {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// HTTP status of a failed request, if the failure came from the service
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_display_keeps_body() {
        let err = ApiError::Request {
            status: StatusCode::NOT_FOUND,
            body: r#"{"message":"Entity not found: article"}"#.to_string(),
        };
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(
            err.to_string(),
            r#"Request failed with status 404 Not Found: {"message":"Entity not found: article"}"#
        );
    }

    #[test]
    fn test_status_absent_for_local_errors() {
        let err = ApiError::InvalidResponse("missing location".to_string());
        assert!(err.status().is_none());
    }
}
