//! Navigation error taxonomy

use thiserror::Error;

/// Errors raised while resolving, rendering or dispatching a page
///
/// Only [`NavError::Configuration`] is fatal. Every other kind is caught at
/// the nearest navigation boundary and shown as a banner on the page the
/// user can still see.
#[derive(Debug, Error)]
pub enum NavError {
    /// Target id is absent from the registry
    #[error("Page not found: {page_id}")]
    PageNotFound { page_id: String },

    /// The page's own pre-render hook failed
    #[error("Failed to prepare page '{page_id}': {cause}")]
    PreRender {
        page_id: String,
        cause: anyhow::Error,
    },

    /// A callback action failed
    #[error("Action \"{label}\" failed: {cause}")]
    Action { label: String, cause: anyhow::Error },

    /// The page's action generator failed
    #[error("Failed to load choices for page '{page_id}': {cause}")]
    ActionList {
        page_id: String,
        cause: anyhow::Error,
    },

    /// Setup mistake, surfaced before any prompt is shown
    #[error("Menu configuration error: {message}")]
    Configuration { message: String },
}

/// Result alias for navigation operations
pub type Result<T> = std::result::Result<T, NavError>;

impl NavError {
    /// Build a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn page_not_found(page_id: impl Into<String>) -> Self {
        Self::PageNotFound {
            page_id: page_id.into(),
        }
    }

    /// Whether this error must abort the program instead of becoming a banner
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = NavError::configuration("no initial page");
        assert!(matches!(err, NavError::Configuration { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_page_not_found_message() {
        let err = NavError::page_not_found("settings");
        assert_eq!(err.to_string(), "Page not found: settings");
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_action_error_names_label() {
        let err = NavError::Action {
            label: "Refresh".to_string(),
            cause: anyhow::anyhow!("timed out"),
        };
        assert_eq!(err.to_string(), "Action \"Refresh\" failed: timed out");
    }
}
