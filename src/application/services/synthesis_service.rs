use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::application::prompts::SYNTHESIS_SYSTEM_PROMPT;
use crate::domain::ChatMessage;

use super::AnalysisError;

/// Combines a transcript analysis with per-frame scene analyses into a
/// short conversational reply suitable for text-to-speech.
pub struct SynthesisService {
    llm_client: Arc<dyn LlmClient>,
    model: String,
}

impl SynthesisService {
    pub fn new(llm_client: Arc<dyn LlmClient>, model: String) -> Self {
        Self { llm_client, model }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    #[tracing::instrument(
        skip_all,
        fields(model = %self.model, frame_count = surrounding_analysis.len())
    )]
    pub async fn synthesize(
        &self,
        transcription_analysis: &str,
        surrounding_analysis: &[String],
    ) -> Result<String, AnalysisError> {
        if transcription_analysis.trim().is_empty() && surrounding_analysis.is_empty() {
            return Err(AnalysisError::InvalidInput(
                "transcription_analysis and surrounding_analysis are both empty".to_string(),
            ));
        }

        let messages = [
            ChatMessage::system(SYNTHESIS_SYSTEM_PROMPT),
            ChatMessage::user(format_synthesis_message(
                transcription_analysis,
                surrounding_analysis,
            )),
        ];

        let response = self.llm_client.complete(&self.model, &messages).await?;
        tracing::info!(chars = response.len(), "Synthesis completed");

        Ok(response)
    }
}

/// Builds the user message: the transcript analysis followed by one
/// `Frame N:` line per scene analysis, numbered from 1.
pub fn format_synthesis_message(
    transcription_analysis: &str,
    surrounding_analysis: &[String],
) -> String {
    let surrounding_context = surrounding_analysis
        .iter()
        .enumerate()
        .map(|(index, analysis)| format!("Frame {}: {}", index + 1, analysis))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Transcription Analysis:\n{}\n\nSurrounding Visual Analysis:\n{}",
        transcription_analysis, surrounding_context
    )
}
