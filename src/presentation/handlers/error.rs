use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::LlmClientError;
use crate::application::services::AnalysisError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

pub fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
        .into_response()
}

/// Maps a service failure onto an HTTP response. `context` prefixes the
/// message of unexpected upstream failures, e.g. "Error processing image".
pub(super) fn analysis_error_response(error: &AnalysisError, context: &str) -> Response {
    match error {
        AnalysisError::InvalidInput(message) => {
            tracing::warn!(error = %message, "Rejected invalid request");
            error_response(StatusCode::BAD_REQUEST, message.as_str())
        }
        AnalysisError::Completion(LlmClientError::RateLimited) => {
            tracing::warn!("Upstream model rate limited the request");
            error_response(
                StatusCode::TOO_MANY_REQUESTS,
                format!("{}: upstream model is rate limited", context),
            )
        }
        AnalysisError::Completion(e) => {
            tracing::error!(error = %e, "{}", context);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("{}: {}", context, e),
            )
        }
    }
}
