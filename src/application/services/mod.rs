mod analysis_error;
mod synthesis_service;
mod transcript_analysis_service;
mod vision_service;

pub use analysis_error::AnalysisError;
pub use synthesis_service::{SynthesisService, format_synthesis_message};
pub use transcript_analysis_service::TranscriptAnalysisService;
pub use vision_service::VisionService;
