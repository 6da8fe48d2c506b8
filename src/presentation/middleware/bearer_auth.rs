use axum::extract::{Request, State};
use axum::http::header::{AUTHORIZATION, WWW_AUTHENTICATE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::Response;

use crate::presentation::handlers::error_response;
use crate::presentation::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthFailure {
    MissingCredentials,
    InvalidToken,
}

impl AuthFailure {
    fn detail(self) -> &'static str {
        match self {
            AuthFailure::MissingCredentials => "Not authenticated",
            AuthFailure::InvalidToken => "Invalid authentication token",
        }
    }
}

/// Requires `Authorization: Bearer <token>` on every request. The token is
/// only checked against the configured value when one is set.
pub async fn require_bearer_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    match authorize(request.headers(), state.auth_token.as_deref()) {
        Ok(()) => next.run(request).await,
        Err(failure) => {
            tracing::warn!(reason = failure.detail(), "Rejected unauthenticated request");
            let mut response = error_response(StatusCode::UNAUTHORIZED, failure.detail());
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
            response
        }
    }
}

fn authorize(headers: &HeaderMap, expected: Option<&str>) -> Result<(), AuthFailure> {
    let presented = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_credentials)
        .ok_or(AuthFailure::MissingCredentials)?;

    match expected {
        Some(expected) if !constant_time_eq(presented.as_bytes(), expected.as_bytes()) => {
            Err(AuthFailure::InvalidToken)
        }
        _ => Ok(()),
    }
}

fn bearer_credentials(value: &str) -> Option<&str> {
    let (scheme, credentials) = value.trim().split_once(' ')?;
    let credentials = credentials.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !credentials.is_empty()).then_some(credentials)
}

// Leaks only the length of the presented token, never which byte differs.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let diff = a
        .iter()
        .zip(b)
        .fold(0u8, |acc, (x, y)| std::hint::black_box(acc | (x ^ y)));
    diff == 0
}
