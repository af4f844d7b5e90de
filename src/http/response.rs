//! Locally generated error responses.
//!
//! # Design Decisions
//! - Routing misses carry no CORS headers
//! - Upstream failures only grant `Access-Control-Allow-Origin`, not the
//!   method/header set that relayed responses receive

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::http::cors;

/// 404 for requests no route claimed.
pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

/// 500 with `{"error": message}` for a failed upstream exchange.
pub fn upstream_error(message: &str) -> Response {
    let body = json!({ "error": message }).to_string();
    let mut response = (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();

    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    cors::apply_allow_origin(headers);
    response
}
