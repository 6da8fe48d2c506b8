use async_trait::async_trait;

use crate::domain::ChatMessage;

/// A single, non-streaming chat-completion call against a hosted model.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends `messages` to `model` and returns the text of the first choice.
    async fn complete(&self, model: &str, messages: &[ChatMessage])
    -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("configuration: {0}")]
    Configuration(String),
}
