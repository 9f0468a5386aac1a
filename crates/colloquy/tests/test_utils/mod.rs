//! Test utilities for Colloquy tests.
//!
//! Provides a mock completion service that records every request it
//! receives, plus config helpers.

use async_trait::async_trait;
use colloquy::{
    ChatChoice, ChatMessage, ChatRequest, ChatResponse, ClientConfig, CompletionService,
    ServiceError,
};
use std::sync::Mutex;

/// What the mock service does with each request.
pub enum MockBehavior {
    /// Return a single assistant choice with this content.
    Reply(String),
    /// Fail with this HTTP status and raw body.
    FailStatus { status: u16, body: String },
    /// Return a well-formed response with no choices.
    EmptyChoices,
}

/// A scripted completion service that records requests.
pub struct MockCompletionService {
    behavior: MockBehavior,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockCompletionService {
    pub fn replying(content: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Reply(content.into()))
    }

    pub fn failing(status: u16, body: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::FailStatus {
            status,
            body: body.into(),
        })
    }

    pub fn empty() -> Self {
        Self::with_behavior(MockBehavior::EmptyChoices)
    }

    pub fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Returns a copy of every request received so far, in order.
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().expect("Request log poisoned").clone()
    }
}

#[async_trait]
impl CompletionService for MockCompletionService {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, ServiceError> {
        self.requests
            .lock()
            .expect("Request log poisoned")
            .push(request.clone());

        match &self.behavior {
            MockBehavior::Reply(content) => Ok(ChatResponse {
                choices: vec![ChatChoice {
                    message: ChatMessage {
                        role: "assistant".to_string(),
                        content: content.clone(),
                    },
                    finish_reason: Some("stop".to_string()),
                }],
                usage: None,
            }),
            MockBehavior::FailStatus { status, body } => Err(ServiceError::Api {
                status: *status,
                message: body.clone(),
            }),
            MockBehavior::EmptyChoices => Ok(ChatResponse {
                choices: vec![],
                usage: None,
            }),
        }
    }
}

/// A valid configuration with an explicit endpoint.
pub fn test_config() -> ClientConfig {
    ClientConfig::from_json_str(
        r#"{
            "api_key": "sk-test",
            "api_url": "https://api.example.com/v1",
            "model": "gpt-4o",
            "temperature": 0.7,
            "max_tokens": 1000
        }"#,
    )
    .expect("Valid test config")
}
