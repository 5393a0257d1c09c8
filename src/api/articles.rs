//! Article API endpoints

use super::request::RequestBody;
use super::{ApiError, FigshareClient, Result};
use crate::models::{ApiResponse, ArticleUpdate, Categories, NewArticle};
use reqwest::Method;
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

impl FigshareClient {
    /// Create a new article in the caller's account.
    ///
    /// Returns the id assigned by Figshare, or `None` when the service reports
    /// an `error` in an otherwise successful response.
    pub async fn create_article(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        defined_type: impl Into<String>,
        tags: Vec<String>,
        categories: impl Into<Categories>,
    ) -> Result<Option<u64>> {
        let article = NewArticle {
            title: title.into(),
            description: description.into(),
            defined_type: defined_type.into(),
            tags,
            categories: categories.into(),
        };
        self.create(&article).await
    }

    /// Create an article from a prepared body
    pub async fn create(&self, article: &NewArticle) -> Result<Option<u64>> {
        let url = self.endpoint("/account/articles");
        let response = self
            .send(Method::POST, &url, Some(RequestBody::json(article)?))
            .await?;
        created_article_id(&response)
    }

    /// Update an existing article. Only the fields set on `update` are sent.
    pub async fn update_article(
        &self,
        article_id: u64,
        update: &ArticleUpdate,
    ) -> Result<ApiResponse> {
        let url = self.endpoint(&format!("/account/articles/{}", article_id));
        debug!(article_id, fields = ?update.fields(), "Updating article");
        self.send(Method::PUT, &url, Some(RequestBody::json(update)?))
            .await
    }

    /// Update an article from an open set of attributes; keys that are not
    /// updatable article fields are dropped.
    pub async fn update_article_attributes<I, K>(
        &self,
        article_id: u64,
        attributes: I,
    ) -> Result<ApiResponse>
    where
        I: IntoIterator<Item = (K, JsonValue)>,
        K: AsRef<str>,
    {
        let update = ArticleUpdate::from_attributes(attributes)?;
        self.update_article(article_id, &update).await
    }

    /// Get the details of an article, optionally at a given version
    pub async fn get_article_details(
        &self,
        article_id: u64,
        version: Option<u32>,
    ) -> Result<ApiResponse> {
        let path = match version {
            None => format!("/articles/{}", article_id),
            Some(version) => format!("/articles/{}/versions/{}", article_id, version),
        };
        self.get(&self.scoped(&path)).await
    }

    /// List the published versions of an article
    pub async fn list_article_versions(&self, article_id: u64) -> Result<ApiResponse> {
        // Versions are only listed publicly, whatever the visibility mode
        let url = self.endpoint(&format!("/articles/{}/versions", article_id));
        self.get(&url).await
    }
}

/// Read the new article id from the `location` of a create response
fn created_article_id(response: &ApiResponse) -> Result<Option<u64>> {
    let json = response.as_json().ok_or_else(|| {
        ApiError::InvalidResponse("create article returned a non-JSON body".to_string())
    })?;

    if let Some(error) = json.get("error") {
        warn!(error = %error, "Figshare refused to create the article");
        return Ok(None);
    }

    let location = json
        .get("location")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| {
            ApiError::InvalidResponse("create article response has no location".to_string())
        })?;

    let id = location
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse::<u64>().ok())
        .ok_or_else(|| {
            ApiError::InvalidResponse(format!("no article id in location '{}'", location))
        })?;

    Ok(Some(id))
}
