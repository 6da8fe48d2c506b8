use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::presentation::SERVICE_NAME;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub endpoints: HealthEndpoints,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthEndpoints {
    pub vlm: String,
    pub transcription_analysis: String,
    pub synthesis: String,
}

pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "online".to_string(),
            service: SERVICE_NAME.to_string(),
            endpoints: HealthEndpoints {
                vlm: "/api/vlm".to_string(),
                transcription_analysis: "/api/transcription-analysis".to_string(),
                synthesis: "/api/synthesize".to_string(),
            },
        }),
    )
}
