//! Core data types for the Colloquy conversational client library.
//!
//! This crate provides the foundation data types used across all Colloquy
//! components: conversation roles, messages, and client configuration.

mod config;
mod message;
mod role;

pub use config::{ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
pub use message::{Message, MessageBuilder};
pub use role::Role;
