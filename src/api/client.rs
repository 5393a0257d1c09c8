//! Figshare v2 API client

use super::Result;
use super::request::{RequestBody, RequestExecutor};
use crate::auth::{self, AccessToken};
use crate::models::ApiResponse;
use reqwest::Method;
use reqwest::header::HeaderMap;

/// Base URL of the Figshare v2 API
pub const BASE_URL: &str = "https://api.figshare.com/v2";

/// Settings fixed for the lifetime of a client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    token: Option<AccessToken>,
    base_url: String,
    private: bool,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            token: None,
            base_url: BASE_URL.to_string(),
            private: false,
        }
    }

    /// Authenticate with a personal token. Blank tokens are ignored.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = AccessToken::new(token);
        self
    }

    /// Point the client at another API root, e.g. a staging or mock server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Use account-scoped endpoints instead of public ones
    pub fn with_private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client for the Figshare v2 API
#[derive(Debug, Clone)]
pub struct FigshareClient {
    executor: RequestExecutor,
    config: ClientConfig,
}

impl FigshareClient {
    /// Create a new Figshare client
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_executor(RequestExecutor::new()?, config))
    }

    /// Create a client around an existing executor
    pub fn with_executor(executor: RequestExecutor, config: ClientConfig) -> Self {
        Self { executor, config }
    }

    /// Whether account-scoped endpoints are used
    pub fn is_private(&self) -> bool {
        self.config.private
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn has_token(&self) -> bool {
        self.config.token.is_some()
    }

    /// Concatenate a path to the base URL. The path is not encoded.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Headers for a request made with the configured token
    pub fn headers(&self) -> Result<HeaderMap> {
        auth::headers(self.config.token.as_ref().map(AccessToken::secret))
    }

    /// Path under the account scope when private, the public one otherwise
    pub(crate) fn scoped(&self, path: &str) -> String {
        if self.config.private {
            self.endpoint(&format!("/account{}", path))
        } else {
            self.endpoint(path)
        }
    }

    /// Send one request with the client's headers
    pub(crate) async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<RequestBody>,
    ) -> Result<ApiResponse> {
        let headers = self.headers()?;
        self.executor.issue_request(method, url, headers, body).await
    }

    /// Make an authenticated GET request
    pub(crate) async fn get(&self, url: &str) -> Result<ApiResponse> {
        self.send(Method::GET, url, None).await
    }
}
