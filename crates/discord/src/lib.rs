//! Discord REST client
//!
//! A thin, account-bound wrapper over `reqwest`: every request carries the
//! account token, bodies are sent as JSON, and responses come back as JSON
//! when they parse and as text otherwise.

pub mod client;
pub mod error;
pub mod types;

pub use client::{DEFAULT_BASE_ENDPOINT, DiscordClient, endpoint_url};
pub use error::{ClientError, Result};
pub use types::{ApiResponse, User};

pub use reqwest::Method;
