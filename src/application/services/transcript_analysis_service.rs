use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::application::prompts::{TRANSCRIPT_ANALYSIS_SYSTEM_PROMPT, resolve_system_prompt};
use crate::domain::ChatMessage;

use super::AnalysisError;

pub struct TranscriptAnalysisService {
    llm_client: Arc<dyn LlmClient>,
    model: String,
}

impl TranscriptAnalysisService {
    pub fn new(llm_client: Arc<dyn LlmClient>, model: String) -> Self {
        Self { llm_client, model }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    #[tracing::instrument(skip_all, fields(model = %self.model, custom_prompt = prompt.is_some()))]
    pub async fn analyze(
        &self,
        transcript: &str,
        prompt: Option<&str>,
    ) -> Result<String, AnalysisError> {
        if transcript.trim().is_empty() {
            return Err(AnalysisError::InvalidInput(
                "transcript must not be empty".to_string(),
            ));
        }

        let system_prompt = resolve_system_prompt(prompt, TRANSCRIPT_ANALYSIS_SYSTEM_PROMPT);
        let messages = [
            ChatMessage::system(system_prompt),
            ChatMessage::user(transcript),
        ];

        let analysis = self.llm_client.complete(&self.model, &messages).await?;
        tracing::info!(chars = analysis.len(), "Transcript analysis completed");

        Ok(analysis)
    }
}
