use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::application::prompts::{VISION_SYSTEM_PROMPT, resolve_system_prompt};
use crate::domain::{ChatMessage, ContentPart, ImageSource};

use super::AnalysisError;

/// Scene analysis of first-person camera frames.
pub struct VisionService {
    llm_client: Arc<dyn LlmClient>,
    model: String,
}

impl VisionService {
    pub fn new(llm_client: Arc<dyn LlmClient>, model: String) -> Self {
        Self { llm_client, model }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Analyzes a base64 image (bare payload or `data:image/...` URI).
    ///
    /// Vision models receive the instructions as a text part of the user
    /// message, followed by the image.
    #[tracing::instrument(skip_all, fields(model = %self.model, custom_prompt = prompt.is_some()))]
    pub async fn analyze(
        &self,
        base64_image: &str,
        prompt: Option<&str>,
    ) -> Result<String, AnalysisError> {
        let image = ImageSource::parse(base64_image)?;
        tracing::debug!(image = %image, "Forwarding frame to vision model");

        let instructions = resolve_system_prompt(prompt, VISION_SYSTEM_PROMPT);
        let messages = [ChatMessage::user_parts(vec![
            ContentPart::Text(instructions.to_string()),
            ContentPart::Image(image),
        ])];

        let response = self.llm_client.complete(&self.model, &messages).await?;
        tracing::info!(chars = response.len(), "Vision analysis completed");

        Ok(response)
    }
}
