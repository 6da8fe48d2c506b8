use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;

const OPENAPI_SPEC: &str = include_str!("../../../openapi.json");

pub async fn openapi_handler() -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/json")], OPENAPI_SPEC)
}
