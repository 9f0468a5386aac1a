//! Client configuration loaded from a JSON file.

use colloquy_error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default base URL when the configuration omits `api_url`.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1";

/// Default transport timeout. Calls block until the service responds,
/// so the timeout must never be infinite.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Immutable client configuration.
///
/// Loaded once at construction; every component holds its own copy and no
/// process-wide singleton exists.
///
/// # Examples
///
/// ```
/// use colloquy_core::ClientConfig;
///
/// let config = ClientConfig::from_json_str(
///     r#"{
///         "api_key": "sk-test",
///         "model": "gpt-4o",
///         "temperature": 0.7,
///         "max_tokens": 1000
///     }"#,
/// ).unwrap();
///
/// assert_eq!(config.model(), "gpt-4o");
/// assert!(config.api_url().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ClientConfig {
    /// API key used as the bearer token
    api_key: String,
    /// Base URL of the OpenAI-compatible API (optional)
    #[serde(default)]
    api_url: Option<String>,
    /// Model identifier
    model: String,
    /// Sampling temperature
    temperature: f32,
    /// Maximum tokens to generate per turn
    max_tokens: u32,
    /// Transport timeout in seconds (optional)
    #[serde(default)]
    request_timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Load configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] of kind `NotFound` if the file is absent,
    /// or kind `Invalid` if the file cannot be read, is not valid JSON, or
    /// is missing a required field.
    #[tracing::instrument(skip(path))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::not_found(format!(
                    "Configuration file does not exist: {}",
                    path.display()
                ))
            } else {
                ConfigError::invalid(format!(
                    "Failed to read config file {}: {}",
                    path.display(),
                    e
                ))
            }
        })?;

        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] of kind `Invalid` for malformed JSON or a
    /// missing or mistyped required field.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content)
            .map_err(|e| ConfigError::invalid(format!("Invalid configuration file format: {}", e)))
    }

    /// Returns the configured base URL, falling back to [`DEFAULT_API_URL`].
    pub fn base_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Returns the transport timeout, falling back to [`DEFAULT_TIMEOUT_SECS`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Ensure `api_url` is present, for components that require an explicit
    /// endpoint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] of kind `Invalid` when `api_url` is absent.
    pub fn require_api_url(&self) -> Result<&str, ConfigError> {
        self.api_url
            .as_deref()
            .ok_or_else(|| ConfigError::invalid("Missing required field `api_url`"))
    }
}
