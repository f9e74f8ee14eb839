//! Configuration management for SEObot
//!
//! This module handles loading, parsing, and validating configuration
//! from a YAML file with environment variable overrides.

use crate::error::{Result, SeobotError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Environment variable that overrides the backend base URL
pub const API_URL_ENV: &str = "SEOBOT_API_URL";

/// Main configuration structure for SEObot
///
/// Holds backend connectivity settings and chat demo behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Backend API configuration
    #[serde(default)]
    pub backend: BackendConfig,

    /// Chat demo configuration
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Backend API configuration
///
/// The base URL is required for the `analyze`, `generate`, and `ask`
/// commands and for `chat --remote`. The local chat demo works without it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the SEO backend (e.g. "http://localhost:8000")
    ///
    /// May also be supplied via the `SEOBOT_API_URL` environment variable,
    /// which takes precedence over the config file.
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Chat demo configuration
///
/// Controls the simulated typing delay and the optional RNG seed used for
/// delay sampling and fallback reply selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Lower bound of the simulated typing delay (inclusive, milliseconds)
    #[serde(default = "default_min_typing_delay_ms")]
    pub min_typing_delay_ms: u64,

    /// Upper bound of the simulated typing delay (exclusive, milliseconds)
    #[serde(default = "default_max_typing_delay_ms")]
    pub max_typing_delay_ms: u64,

    /// Optional seed for deterministic delays and fallback replies
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_min_typing_delay_ms() -> u64 {
    500
}

fn default_max_typing_delay_ms() -> u64 {
    1500
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            min_typing_delay_ms: default_min_typing_delay_ms(),
            max_typing_delay_ms: default_max_typing_delay_ms(),
            seed: None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// A missing file is not an error: defaults are used so the local chat
    /// demo runs without any setup. After loading, `SEOBOT_API_URL` (if set
    /// and non-empty) overrides `backend.base_url`.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&contents)?
        } else {
            tracing::debug!("Config file {} not found, using defaults", path.display());
            Self::default()
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                tracing::debug!("Overriding backend base URL from {}", API_URL_ENV);
                config.backend.base_url = Some(url);
            }
        }

        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Checks that the backend base URL (when present) parses as an absolute
    /// URL and that the typing delay range is non-empty.
    ///
    /// # Errors
    ///
    /// Returns `SeobotError::Config` describing the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.backend.base_url {
            Url::parse(base_url).map_err(|e| {
                SeobotError::Config(format!("Invalid backend base URL '{}': {}", base_url, e))
            })?;
        }

        if self.chat.min_typing_delay_ms >= self.chat.max_typing_delay_ms {
            return Err(SeobotError::Config(format!(
                "Typing delay range is empty: min {}ms must be below max {}ms",
                self.chat.min_typing_delay_ms, self.chat.max_typing_delay_ms
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.backend.base_url.is_none());
        assert_eq!(config.chat.min_typing_delay_ms, 500);
        assert_eq!(config.chat.max_typing_delay_ms, 1500);
        assert!(config.chat.seed.is_none());
    }

    #[test]
    fn test_default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r#"
backend:
  base_url: "http://localhost:8000"
chat:
  min_typing_delay_ms: 100
  max_typing_delay_ms: 200
  seed: 42
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config.backend.base_url.as_deref(),
            Some("http://localhost:8000")
        );
        assert_eq!(config.chat.min_typing_delay_ms, 100);
        assert_eq!(config.chat.max_typing_delay_ms, 200);
        assert_eq!(config.chat.seed, Some(42));
    }

    #[test]
    fn test_parse_partial_yaml_uses_defaults() {
        let yaml = r#"
backend:
  base_url: "http://localhost:8000"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.chat.min_typing_delay_ms, 500);
        assert_eq!(config.chat.max_typing_delay_ms, 1500);
    }

    #[test]
    fn test_validate_rejects_invalid_base_url() {
        let config = Config {
            backend: BackendConfig {
                base_url: Some("not a url".to_string()),
            },
            chat: ChatConfig::default(),
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid backend base URL"));
    }

    #[test]
    fn test_validate_rejects_empty_delay_range() {
        let config = Config {
            backend: BackendConfig::default(),
            chat: ChatConfig {
                min_typing_delay_ms: 1500,
                max_typing_delay_ms: 500,
                seed: None,
            },
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Typing delay range is empty"));
    }

    #[test]
    #[serial]
    fn test_load_missing_file_uses_defaults() {
        std::env::remove_var(API_URL_ENV);
        let config = Config::load("/nonexistent/seobot.yaml").unwrap();
        assert!(config.backend.base_url.is_none());
    }

    #[test]
    #[serial]
    fn test_load_from_file() {
        std::env::remove_var(API_URL_ENV);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "backend:\n  base_url: \"http://host:1234\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.backend.base_url.as_deref(), Some("http://host:1234"));
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "backend:\n  base_url: \"http://from-file:1\"").unwrap();

        std::env::set_var(API_URL_ENV, "http://from-env:2");
        let config = Config::load(file.path()).unwrap();
        std::env::remove_var(API_URL_ENV);

        assert_eq!(config.backend.base_url.as_deref(), Some("http://from-env:2"));
    }

    #[test]
    #[serial]
    fn test_empty_env_does_not_override() {
        std::env::set_var(API_URL_ENV, "  ");
        let config = Config::load("/nonexistent/seobot.yaml").unwrap();
        std::env::remove_var(API_URL_ENV);

        assert!(config.backend.base_url.is_none());
    }
}
