//! OpenAI-compatible HTTP client for the Colloquy library.
//!
//! This crate provides a reusable client for any API that follows the OpenAI
//! chat completions format, plus the embeddings and image generation
//! endpoints, and the [`CompletionService`] trait that higher layers program
//! against.

mod client;
pub mod conversions;
mod dto;
mod service;

pub use client::ChatClient;
pub use dto::{
    ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatUsage, EmbeddingRequest,
    EmbeddingResponse, GeneratedImage, ImageRequest, ImageResponse,
};
pub use service::CompletionService;
