// src/api/mod.rs
use thiserror::Error;

pub mod client;
pub mod csrf;
pub mod types;

pub use client::{ApiClient, Endpoints};
pub use csrf::{CsrfError, TokenSource};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("CSRF token error: {0}")]
    Csrf(#[from] CsrfError),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Could not decode the service response: {0}")]
    Decode(#[from] serde_json::Error),
}
