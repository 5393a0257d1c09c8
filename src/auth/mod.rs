//! Auth module for Figshare personal tokens
//!
//! Figshare authenticates account-scoped calls with a personal token sent as
//! `Authorization: token <TOKEN>`.

mod token;

pub use token::{AccessToken, headers};
