//! Account-bound Discord REST client

use crate::error::{ClientError, Result};
use crate::types::{ApiResponse, User};
use reqwest::{Method, StatusCode, Url, header};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Discord REST API v9
pub const DEFAULT_BASE_ENDPOINT: &str = "https://discord.com/api/v9/";

/// Client bound to a single account token
#[derive(Debug, Clone)]
pub struct DiscordClient {
    base: String,
    token: String,
    client: reqwest::Client,
}

impl DiscordClient {
    /// Create a client with the default 30 second timeout
    pub fn new(base: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base, token, Duration::from_secs(30))
    }

    pub fn with_timeout(
        base: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("switchboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let base = base.into();
        // fail early on a base that can never form a URL
        endpoint_url(&base, "")?;

        Ok(Self {
            base,
            token: token.into(),
            client,
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Perform a request and decode the body as JSON, falling back to text
    ///
    /// The status code is not inspected; callers that care use [`Self::request`].
    pub async fn api_request(
        &self,
        path: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<ApiResponse> {
        let (_, response) = self.request(path, method, body).await?;
        Ok(response)
    }

    /// Like [`Self::api_request`] but also returns the status code
    pub async fn request(
        &self,
        path: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<(StatusCode, ApiResponse)> {
        let url = endpoint_url(&self.base, path)?;
        debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, url)
            .header(header::AUTHORIZATION, &self.token);

        if let Some(body) = body {
            request = request
                .header(header::CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(body)?);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!("Discord API responded with {}", status);
        }

        Ok((status, ApiResponse::from_body(text)))
    }

    /// `GET users/@me`
    pub async fn current_user(&self) -> Result<User> {
        let (status, response) = self.request("users/@me", Method::GET, None).await?;

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: response.error_message(),
            });
        }

        match response {
            ApiResponse::Json(value) => Ok(serde_json::from_value(value)?),
            ApiResponse::Text(text) => Err(ClientError::UnexpectedResponse(text)),
        }
    }
}

/// Join a request path onto the base endpoint
///
/// A single leading `/` on the path is dropped and the base is treated as a
/// directory, so `("https://h/api/v9", "/users/@me")` and
/// `("https://h/api/v9/", "users/@me")` address the same resource.
pub fn endpoint_url(base: &str, path: &str) -> Result<Url> {
    let base = base.trim();
    let path = path.strip_prefix('/').unwrap_or(path);
    let joined = if base.ends_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    };

    Url::parse(&joined).map_err(|e| ClientError::InvalidUrl {
        url: joined,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_slash_stripped() {
        let url = endpoint_url(DEFAULT_BASE_ENDPOINT, "/users/@me").unwrap();
        assert_eq!(url.as_str(), "https://discord.com/api/v9/users/@me");
    }

    #[test]
    fn test_base_without_trailing_slash() {
        let url = endpoint_url("http://127.0.0.1:8080/api", "guilds/1/channels").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/guilds/1/channels");
    }

    #[test]
    fn test_query_preserved() {
        let url = endpoint_url(DEFAULT_BASE_ENDPOINT, "users/@me/guilds?limit=5").unwrap();
        assert_eq!(url.query(), Some("limit=5"));
    }

    #[test]
    fn test_invalid_base_rejected() {
        assert!(matches!(
            endpoint_url("not a url", "users/@me"),
            Err(ClientError::InvalidUrl { .. })
        ));
        assert!(DiscordClient::new("::", "token").is_err());
    }
}
