//! Article file endpoints

use super::{ApiError, FigshareClient, Result};
use crate::models::ApiResponse;

impl FigshareClient {
    /// List the files of an article.
    ///
    /// With a version, the file list is taken from that version's details.
    pub async fn list_files(&self, article_id: u64, version: Option<u32>) -> Result<ApiResponse> {
        let Some(version) = version else {
            let url = self.scoped(&format!("/articles/{}/files", article_id));
            return self.get(&url).await;
        };

        let details = self.get_article_details(article_id, Some(version)).await?;
        details
            .into_json()
            .and_then(|mut json| json.get_mut("files").map(|files| files.take()))
            .map(ApiResponse::Json)
            .ok_or_else(|| {
                ApiError::InvalidResponse(format!(
                    "article {} version {} has no files",
                    article_id, version
                ))
            })
    }

    /// Get the details of one file of an article
    pub async fn get_file_details(&self, article_id: u64, file_id: u64) -> Result<ApiResponse> {
        let url = self.scoped(&format!("/articles/{}/files/{}", article_id, file_id));
        self.get(&url).await
    }
}
