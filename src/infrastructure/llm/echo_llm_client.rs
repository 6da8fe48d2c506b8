use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{ChatMessage, MessageRole};

/// Offline stand-in used in scaffold mode: echoes the last user message
/// instead of calling a hosted model.
pub struct EchoLlmClient {
    delay: Duration,
}

impl EchoLlmClient {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl LlmClient for EchoLlmClient {
    async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<String, LlmClientError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let last_user = messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .ok_or_else(|| LlmClientError::InvalidResponse("no user message".to_string()))?;

        let image_count = last_user.images().count();
        let text = if image_count > 0 {
            format!("{} image(s) received", image_count)
        } else {
            last_user.text()
        };

        Ok(format!("[{}] Echo: {}", model, text))
    }
}
