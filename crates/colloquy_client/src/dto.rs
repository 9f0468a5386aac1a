//! Data transfer objects for the OpenAI-compatible wire format.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A message in the chat completions wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

/// Chat completion request.
#[derive(Debug, Clone, PartialEq, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatRequest {
    /// Model identifier
    model: String,
    /// Conversation messages, in turn order
    messages: Vec<ChatMessage>,
    /// Maximum tokens to generate
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Enable streaming (always false or omitted here)
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<bool>,
}

impl ChatRequest {
    /// Creates a new builder for ChatRequest.
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }
}

/// A choice in the chat completions response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The message content
    pub message: ChatMessage,
    /// Reason for finishing
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatUsage {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_tokens: Option<usize>,
    /// Tokens in the completion
    #[serde(default)]
    pub completion_tokens: Option<usize>,
    /// Total tokens
    #[serde(default)]
    pub total_tokens: Option<usize>,
}

/// Chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Response choices
    pub choices: Vec<ChatChoice>,
    /// Token usage
    #[serde(default)]
    pub usage: Option<ChatUsage>,
}

/// Embedding request.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct EmbeddingRequest {
    /// Model identifier
    model: String,
    /// Text to embed
    input: String,
    /// Encoding format for the returned vector
    #[builder(default = "\"float\".to_string()")]
    encoding_format: String,
}

impl EmbeddingRequest {
    /// Creates a new builder for EmbeddingRequest.
    pub fn builder() -> EmbeddingRequestBuilder {
        EmbeddingRequestBuilder::default()
    }
}

/// One embedding vector in the response.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingData {
    /// The embedding vector
    pub embedding: Vec<f32>,
}

/// Embedding response.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingResponse {
    /// Embedding vectors, one per input
    pub data: Vec<EmbeddingData>,
}

/// Image generation request.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ImageRequest {
    /// Model identifier
    model: String,
    /// Prompt describing the image
    prompt: String,
    /// Number of images to generate
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    n: Option<u32>,
    /// Image size, e.g. "1024x1024"
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<String>,
}

impl ImageRequest {
    /// Creates a new builder for ImageRequest.
    pub fn builder() -> ImageRequestBuilder {
        ImageRequestBuilder::default()
    }
}

/// A generated image handle. The service returns either a URL or inline
/// base64 data depending on the requested response format.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedImage {
    /// URL of the generated image
    #[serde(default)]
    pub url: Option<String>,
    /// Base64-encoded image data
    #[serde(default)]
    pub b64_json: Option<String>,
}

/// Image generation response.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageResponse {
    /// Generated images
    pub data: Vec<GeneratedImage>,
}
