//! HTTP client for OpenAI-compatible APIs.

use crate::dto::{
    ChatRequest, ChatResponse, EmbeddingRequest, EmbeddingResponse, GeneratedImage, ImageRequest,
    ImageResponse,
};
use crate::service::CompletionService;
use async_trait::async_trait;
use colloquy_core::ClientConfig;
use colloquy_error::ServiceError;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Client for any OpenAI-compatible API.
///
/// Handles the common chat completions format plus the embeddings and
/// image generation endpoints. All calls are blocking from the caller's
/// perspective: each awaits the response or the transport timeout.
/// Dropping the returned future cancels the in-flight request.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ChatClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - API key sent as the bearer token
    /// * `base_url` - Base URL of the API, e.g. `https://api.openai.com/v1`
    /// * `timeout` - Transport timeout applied to every request
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    #[instrument(skip(api_key))]
    pub fn new(
        api_key: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Http(format!("Failed to build HTTP client: {}", e)))?;

        debug!(url = %base_url, timeout_secs = timeout.as_secs(), "Created chat client");

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ServiceError> {
        Self::new(
            config.api_key().clone(),
            config.base_url().to_string(),
            config.request_timeout(),
        )
    }

    /// Returns the base URL this client posts to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generates embeddings for the given input text.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the service returns a
    /// non-success status, or the response contains no embedding.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn embed(&self, request: &EmbeddingRequest) -> Result<Vec<f32>, ServiceError> {
        let url = format!("{}/embeddings", self.base_url);
        let response: EmbeddingResponse = self.post_json(&url, request).await?;

        response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| ServiceError::ResponseParsing("No embedding in response".to_string()))
    }

    /// Generates images from a prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service returns a
    /// non-success status.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn generate_image(
        &self,
        request: &ImageRequest,
    ) -> Result<Vec<GeneratedImage>, ServiceError> {
        let url = format!("{}/images/generations", self.base_url);
        let response: ImageResponse = self.post_json(&url, request).await?;
        Ok(response.data)
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ServiceError> {
        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = ?e, "HTTP request failed");
                ServiceError::Http(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(url = %url, status = %status, error = %error_text, "API error");

            return Err(ServiceError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        response.json().await.map_err(|e| {
            error!(url = %url, error = ?e, "Failed to parse response");
            ServiceError::ResponseParsing(format!("Failed to parse JSON: {}", e))
        })
    }
}

#[async_trait]
impl CompletionService for ChatClient {
    #[instrument(skip(self, request), fields(model = %request.model()))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, ServiceError> {
        let url = format!("{}/chat/completions", self.base_url);

        debug!(
            model = %request.model(),
            message_count = request.messages().len(),
            "Sending chat request"
        );

        let response: ChatResponse = self.post_json(&url, request).await?;

        debug!(choices = response.choices.len(), "Received response");

        Ok(response)
    }
}
