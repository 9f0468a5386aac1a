//! Conversational session and text analysis over OpenAI-compatible APIs.
//!
//! Two independent components share one service seam:
//!
//! - [`ChatSession`] keeps an ordered message history and exchanges it with
//!   the remote service on each turn.
//! - [`TextAnalyzer`] maps an [`AnalysisKind`] to a fixed prompt template and
//!   issues stateless single-turn requests.
//!
//! Both load their configuration from a JSON file at construction and honor
//! the same contract: construction failures propagate, runtime failures are
//! available typed (`try_*`) or as display-only diagnostic strings.

mod analyzer;
mod session;

pub use analyzer::{AnalysisKind, TextAnalyzer};
pub use session::ChatSession;

pub use colloquy_client::{
    ChatChoice, ChatClient, ChatMessage, ChatRequest, ChatResponse, CompletionService,
};
pub use colloquy_core::{ClientConfig, Message, Role};
pub use colloquy_error::{ColloquyError, ColloquyResult, ConfigError, ConfigErrorKind, ServiceError};
