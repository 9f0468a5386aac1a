//! Error types for the Colloquy conversational client library.

mod config;
mod service;

pub use config::{ConfigError, ConfigErrorKind};
pub use service::ServiceError;

/// Top-level error type aggregating all Colloquy error sources.
#[derive(Debug, Clone, derive_more::Display, derive_more::From)]
pub enum ColloquyError {
    /// Configuration loading or validation failed
    #[display("{}", _0)]
    Config(ConfigError),
    /// The remote completion service call failed
    #[display("{}", _0)]
    Service(ServiceError),
}

impl std::error::Error for ColloquyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ColloquyError::Config(e) => Some(e),
            ColloquyError::Service(e) => Some(e),
        }
    }
}

/// Convenience alias used across the workspace.
pub type ColloquyResult<T> = Result<T, ColloquyError>;
