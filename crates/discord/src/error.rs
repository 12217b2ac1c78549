//! Client error definitions

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure or unreadable body
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// The base URL or request path could not form a URL
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success status from a typed endpoint
    #[error("Discord API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body had an unexpected shape
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
