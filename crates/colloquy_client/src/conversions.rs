//! Conversions between Colloquy core types and the wire format.

use crate::dto::{ChatMessage, ChatRequest, ChatResponse};
use colloquy_core::{ClientConfig, Message};
use colloquy_error::ServiceError;

/// Builds a chat completion request from a message history and configuration.
///
/// The full history is sent in insertion order; `model`, `temperature`, and
/// `max_tokens` come from the configuration. Streaming is never requested.
pub fn to_chat_request(
    messages: &[Message],
    config: &ClientConfig,
) -> Result<ChatRequest, ServiceError> {
    let wire_messages: Vec<ChatMessage> = messages
        .iter()
        .map(|msg| ChatMessage {
            role: msg.role().as_str().to_string(),
            content: msg.content().clone(),
        })
        .collect();

    ChatRequest::builder()
        .model(config.model().clone())
        .messages(wire_messages)
        .max_tokens(Some(*config.max_tokens()))
        .temperature(Some(*config.temperature()))
        .stream(Some(false))
        .build()
        .map_err(|e| ServiceError::Builder(format!("Failed to build request: {}", e)))
}

/// Extracts the assistant content from the first choice of a response.
///
/// # Errors
///
/// Returns [`ServiceError::ResponseParsing`] when the response has no choices.
pub fn first_choice_content(response: &ChatResponse) -> Result<String, ServiceError> {
    response
        .choices
        .first()
        .map(|choice| choice.message.content.clone())
        .ok_or_else(|| ServiceError::ResponseParsing("No choices in response".to_string()))
}
