use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::application::services::{SynthesisService, TranscriptAnalysisService, VisionService};
use crate::presentation::config::{MEBIBYTE, ModelSettings, Settings};

#[derive(Clone)]
pub struct AppState {
    pub vision_service: Arc<VisionService>,
    pub transcript_analysis_service: Arc<TranscriptAnalysisService>,
    pub synthesis_service: Arc<SynthesisService>,
    pub auth_token: Option<Arc<str>>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * MEBIBYTE;

    /// Wires all three services to one shared client, without auth.
    pub fn new(llm_client: Arc<dyn LlmClient>, models: &ModelSettings) -> Self {
        Self {
            vision_service: Arc::new(VisionService::new(
                Arc::clone(&llm_client),
                models.vision.clone(),
            )),
            transcript_analysis_service: Arc::new(TranscriptAnalysisService::new(
                Arc::clone(&llm_client),
                models.transcription_analysis.clone(),
            )),
            synthesis_service: Arc::new(SynthesisService::new(
                llm_client,
                models.synthesis.clone(),
            )),
            auth_token: None,
            max_body_bytes: Self::DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn from_settings(llm_client: Arc<dyn LlmClient>, settings: &Settings) -> Self {
        Self::new(llm_client, &settings.models)
            .with_auth_token(settings.auth_token())
            .with_max_body_bytes(
                settings
                    .server
                    .max_body_bytes()
                    .unwrap_or(Self::DEFAULT_MAX_BODY_BYTES),
            )
    }

    pub fn with_auth_token(mut self, token: Option<&str>) -> Self {
        self.auth_token = token.map(Arc::from);
        self
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}
