use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::presentation::state::AppState;

use super::error::analysis_error_response;

#[derive(Debug, Deserialize)]
pub struct SynthesisRequest {
    /// Output of `/api/transcription-analysis`.
    pub transcription_analysis: String,
    /// Outputs of `/api/vlm`, one per frame, oldest first.
    pub surrounding_analysis: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesisResponse {
    pub response: String,
}

#[tracing::instrument(
    skip(state, request),
    fields(frame_count = request.surrounding_analysis.len())
)]
pub async fn synthesis_handler(
    State(state): State<AppState>,
    Json(request): Json<SynthesisRequest>,
) -> impl IntoResponse {
    match state
        .synthesis_service
        .synthesize(
            &request.transcription_analysis,
            &request.surrounding_analysis,
        )
        .await
    {
        Ok(response) => (StatusCode::OK, Json(SynthesisResponse { response })).into_response(),
        Err(e) => analysis_error_response(&e, "Error synthesizing response"),
    }
}
