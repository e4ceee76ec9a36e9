use axum::http::header::CACHE_CONTROL;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

/// Liveness check for whatever supervises the service.
pub async fn pong() -> Response {
    let mut response = (StatusCode::OK, "pong").into_response();
    response
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}
