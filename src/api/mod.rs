//! API module for Figshare v2 REST interactions

mod articles;
mod client;
mod error;
mod files;
mod request;

pub use client::{BASE_URL, ClientConfig, FigshareClient};
pub use error::{ApiError, Result};
pub use request::{RequestBody, RequestExecutor};
