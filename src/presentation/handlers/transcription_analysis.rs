use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error::analysis_error_response;

#[derive(Debug, Deserialize)]
pub struct TranscriptionAnalysisRequest {
    pub transcript: String,
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptionAnalysisResponse {
    pub analysis: String,
}

#[tracing::instrument(
    skip(state, request),
    fields(transcript_chars = request.transcript.len(), custom_prompt = request.prompt.is_some())
)]
pub async fn transcription_analysis_handler(
    State(state): State<AppState>,
    Json(request): Json<TranscriptionAnalysisRequest>,
) -> impl IntoResponse {
    tracing::debug!(transcript = %sanitize_prompt(&request.transcript), "Analyzing transcript");

    match state
        .transcript_analysis_service
        .analyze(&request.transcript, request.prompt.as_deref())
        .await
    {
        Ok(analysis) => (
            StatusCode::OK,
            Json(TranscriptionAnalysisResponse { analysis }),
        )
            .into_response(),
        Err(e) => analysis_error_response(&e, "Error analyzing transcript"),
    }
}
