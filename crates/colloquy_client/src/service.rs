//! The completion service seam.

use crate::dto::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use colloquy_error::ServiceError;

/// A remote chat completion service.
///
/// [`ChatClient`](crate::ChatClient) is the HTTP implementation; tests
/// substitute mocks to exercise session and analyzer behavior without a
/// network.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Sends a chat completion request and returns the parsed response.
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, ServiceError>;
}
