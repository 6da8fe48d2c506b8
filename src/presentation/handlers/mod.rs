mod error;
mod health;
mod openapi;
mod synthesis;
mod transcription_analysis;
mod vlm;

pub use error::{ErrorResponse, error_response};
pub use health::{HealthEndpoints, HealthResponse, health_handler};
pub use openapi::openapi_handler;
pub use synthesis::{SynthesisRequest, SynthesisResponse, synthesis_handler};
pub use transcription_analysis::{
    TranscriptionAnalysisRequest, TranscriptionAnalysisResponse, transcription_analysis_handler,
};
pub use vlm::{VlmRequest, VlmResponse, vlm_handler};
