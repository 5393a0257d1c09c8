//! Data models for Figshare requests and responses

mod article;
mod response;

pub use article::{ArticleField, ArticleUpdate, Categories, NewArticle};
pub use response::ApiResponse;
