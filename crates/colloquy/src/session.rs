//! History-tracking conversational sessions.

use colloquy_client::{ChatClient, CompletionService, conversions};
use colloquy_core::{ClientConfig, Message, Role};
use colloquy_error::{ColloquyResult, ServiceError};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument};

/// A conversational session over a remote completion service.
///
/// The session owns its conversation history: each successful turn appends
/// the user message and the assistant reply, in that order. History grows by
/// append, is cleared wholesale by [`clear`](ChatSession::clear), and is
/// never edited in place. Mutating calls take `&mut self`, so concurrent
/// turns against one session are unrepresentable.
///
/// Two send modes are offered: [`try_send`](ChatSession::try_send) returns a
/// typed [`ServiceError`] on failure, while [`send`](ChatSession::send)
/// converts any failure into a diagnostic string so an interactive loop
/// never has to unwind.
pub struct ChatSession {
    config: ClientConfig,
    service: Arc<dyn CompletionService>,
    history: Vec<Message>,
}

impl ChatSession {
    /// Creates a session from a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Fails with a `NotFound` config error when the file is absent, or an
    /// `Invalid` one when it is malformed or missing a required field. A
    /// failed construction yields no session; there is no partially-usable
    /// state.
    #[instrument(skip(path))]
    pub fn from_file(path: impl AsRef<Path>) -> ColloquyResult<Self> {
        let config = ClientConfig::from_file(path)?;
        let client = ChatClient::from_config(&config)?;
        Ok(Self::with_service(config, Arc::new(client)))
    }

    /// Creates a session over an arbitrary completion service.
    pub fn with_service(config: ClientConfig, service: Arc<dyn CompletionService>) -> Self {
        Self {
            config,
            service,
            history: Vec::new(),
        }
    }

    /// Sends a user utterance and returns the assistant reply.
    ///
    /// The user message is appended to history before the call. On success
    /// the assistant reply is appended as well and its content returned. On
    /// failure the user message remains in history, no assistant message is
    /// appended, and the error propagates.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] for transport failures, non-success
    /// statuses, and malformed response bodies.
    #[instrument(skip(self, user_text))]
    pub async fn try_send(&mut self, user_text: &str) -> Result<String, ServiceError> {
        self.history.push(Message::new(Role::User, user_text));

        let request = conversions::to_chat_request(&self.history, &self.config)?;

        debug!(turns = self.history.len(), "Sending conversation");

        let response = self.service.complete(&request).await?;
        let reply = conversions::first_choice_content(&response)?;

        self.history.push(Message::new(Role::Assistant, reply.clone()));

        Ok(reply)
    }

    /// Sends a user utterance, converting any failure into a diagnostic
    /// string.
    ///
    /// The returned string is for human display only; callers that need to
    /// branch on failure should use [`try_send`](ChatSession::try_send).
    pub async fn send(&mut self, user_text: &str) -> String {
        match self.try_send(user_text).await {
            Ok(reply) => reply,
            Err(e) => format!("发生错误 | Error occurred: {}", e),
        }
    }

    /// Clears the conversation history. Idempotent.
    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Returns the conversation history in turn order.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
