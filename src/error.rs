//! Error types for SEObot
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for SEObot operations
///
/// This enum encompasses all possible errors that can occur during
/// configuration loading, chat session handling, and backend API calls.
#[derive(Error, Debug)]
pub enum SeobotError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Backend API errors, displayed verbatim
    ///
    /// The message is the normalized, user-facing text extracted from the
    /// backend error envelope (or the generic status/network fallback), so
    /// no prefix is added.
    #[error("{0}")]
    Api(String),

    /// Chat session errors
    #[error("Chat error: {0}")]
    Chat(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for SEObot operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = SeobotError::Config("backend base URL is not configured".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: backend base URL is not configured"
        );
    }

    #[test]
    fn test_api_error_display_is_verbatim() {
        let error = SeobotError::Api("bad site".to_string());
        assert_eq!(error.to_string(), "bad site");

        let error = SeobotError::Api("HTTP error! status: 500".to_string());
        assert_eq!(error.to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn test_chat_error_display() {
        let error = SeobotError::Chat("responder unavailable".to_string());
        assert_eq!(error.to_string(), "Chat error: responder unavailable");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: SeobotError = io_error.into();
        assert!(matches!(error, SeobotError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let error: SeobotError = json_error.into();
        assert!(matches!(error, SeobotError::Serialization(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>("invalid: : yaml").unwrap_err();
        let error: SeobotError = yaml_error.into();
        assert!(matches!(error, SeobotError::Yaml(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SeobotError>();
    }
}
