//! figshare - a client for the Figshare v2 REST API
//!
//! Supports creating and updating articles in an account, and reading
//! article, version and file metadata from either the account-scoped or the
//! public endpoints.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;

pub use api::{ApiError, ClientConfig, FigshareClient};
pub use models::{ApiResponse, ArticleField, ArticleUpdate, Categories, NewArticle};
