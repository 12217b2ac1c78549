//! Response types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of an API response
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Json(Value),
    Text(String),
}

impl ApiResponse {
    /// Parse as JSON, keeping the raw text when that fails
    pub fn from_body(text: String) -> Self {
        match serde_json::from_str(&text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Discord's `message` field when present, else the body itself
    pub fn error_message(&self) -> String {
        match self {
            Self::Json(value) => value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| value.to_string()),
            Self::Text(text) => text.clone(),
        }
    }
}

/// Subset of the Discord user object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub discriminator: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub verified: Option<bool>,
    #[serde(default)]
    pub mfa_enabled: Option<bool>,
}

impl User {
    /// Global display name, falling back to the username
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_fallback_to_text() {
        assert_eq!(
            ApiResponse::from_body(r#"{"ok":true}"#.to_string()),
            ApiResponse::Json(json!({"ok": true}))
        );
        assert_eq!(
            ApiResponse::from_body("Bad Gateway".to_string()),
            ApiResponse::Text("Bad Gateway".to_string())
        );
        // empty bodies are not valid JSON
        assert_eq!(
            ApiResponse::from_body(String::new()),
            ApiResponse::Text(String::new())
        );
    }

    #[test]
    fn test_error_message() {
        let body = ApiResponse::Json(json!({"message": "401: Unauthorized", "code": 0}));
        assert_eq!(body.error_message(), "401: Unauthorized");
        assert_eq!(ApiResponse::Text("nope".into()).error_message(), "nope");
    }

    #[test]
    fn test_user_display_name() {
        let user: User = serde_json::from_value(json!({
            "id": "80351110224678912",
            "username": "nelly",
            "avatar": null
        }))
        .unwrap();
        assert_eq!(user.display_name(), "nelly");
        assert_eq!(user.global_name, None);
    }
}
