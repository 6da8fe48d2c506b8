use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::presentation::state::AppState;

use super::error::analysis_error_response;

#[derive(Debug, Deserialize)]
pub struct VlmRequest {
    /// Base64 image, with or without a `data:image/...;base64,` prefix.
    pub base64_image: String,
    /// Replaces the built-in scene-analysis instructions.
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VlmResponse {
    pub response: String,
}

#[tracing::instrument(
    skip(state, request),
    fields(image_chars = request.base64_image.len(), custom_prompt = request.prompt.is_some())
)]
pub async fn vlm_handler(
    State(state): State<AppState>,
    Json(request): Json<VlmRequest>,
) -> impl IntoResponse {
    match state
        .vision_service
        .analyze(&request.base64_image, request.prompt.as_deref())
        .await
    {
        Ok(response) => (StatusCode::OK, Json(VlmResponse { response })).into_response(),
        Err(e) => analysis_error_response(&e, "Error processing image"),
    }
}
