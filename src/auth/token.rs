//! Personal access token and request headers

use crate::api::Result;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use std::fmt;

/// Figshare personal token
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a token, ignoring empty or blank values
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token: String = token.into();
        usable(&token).map(|token| Self(token.to_string()))
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

/// Surrounding whitespace (a trailing newline from a config file or an
/// environment variable) is not part of a token; a blank token is no token.
fn usable(token: &str) -> Option<&str> {
    Some(token.trim()).filter(|token| !token.is_empty())
}

// Keep the token out of logs
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Build the headers sent with every Figshare request
pub fn headers(token: Option<&str>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(token) = token.and_then(usable) {
        let mut value = HeaderValue::from_str(&format!("token {}", token))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}
