//! Configuration error types.

/// Distinguishes a missing configuration source from a malformed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigErrorKind {
    /// The configuration file does not exist.
    NotFound,
    /// The configuration file is malformed or missing a required field.
    Invalid,
}

/// Configuration error with source location.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// What went wrong
    pub kind: ConfigErrorKind,
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a ConfigError for a missing configuration source.
    ///
    /// # Examples
    ///
    /// ```
    /// use colloquy_error::{ConfigError, ConfigErrorKind};
    ///
    /// let err = ConfigError::not_found("config.json");
    /// assert_eq!(err.kind, ConfigErrorKind::NotFound);
    /// ```
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_kind(ConfigErrorKind::NotFound, message)
    }

    /// Create a ConfigError for a malformed configuration source.
    ///
    /// # Examples
    ///
    /// ```
    /// use colloquy_error::{ConfigError, ConfigErrorKind};
    ///
    /// let err = ConfigError::invalid("missing required field `api_key`");
    /// assert_eq!(err.kind, ConfigErrorKind::Invalid);
    /// ```
    #[track_caller]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::with_kind(ConfigErrorKind::Invalid, message)
    }

    #[track_caller]
    fn with_kind(kind: ConfigErrorKind, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Configuration Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for ConfigError {}
