//! Checkout link synthesis.
//!
//! Links point back at whichever origin served the request, so every
//! preview deployment hands out links to itself. The upstream is never
//! consulted and the product id is not validated beyond the route pattern.

use axum::body::Body;
use axum::http::header::HOST;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::http::cors;

pub const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
pub const X_FORWARDED_HOST: &str = "x-forwarded-host";

const SUCCESS_MESSAGE: &str = "Link de checkout gerado com sucesso!";
const DEFAULT_SCHEME: &str = "http";
const FALLBACK_HOST: &str = "localhost";

/// JSON body returned by the checkout-link endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutLink {
    pub success: bool,
    pub checkout_url: String,
    pub product_id: String,
    pub message: &'static str,
}

impl CheckoutLink {
    pub fn new(origin: &str, product_id: &str) -> Self {
        Self {
            success: true,
            checkout_url: format!("{}/checkout/{}", origin, product_id),
            product_id: product_id.to_string(),
            message: SUCCESS_MESSAGE,
        }
    }
}

/// Scheme and host the request was received on, e.g. `https://shop.example`.
///
/// An absolute request URI wins; otherwise the forwarding headers set by a
/// fronting proxy (only when `trust_forwarded` is set), then the `Host` header.
pub fn request_origin(req: &Request<Body>, trust_forwarded: bool) -> String {
    let headers = req.headers();

    let scheme = req
        .uri()
        .scheme_str()
        .or_else(|| trust_forwarded.then(|| first_value(headers, X_FORWARDED_PROTO)).flatten())
        .unwrap_or(DEFAULT_SCHEME);

    let host = req
        .uri()
        .authority()
        .map(|a| a.as_str())
        .or_else(|| trust_forwarded.then(|| first_value(headers, X_FORWARDED_HOST)).flatten())
        .or_else(|| first_value(headers, HOST.as_str()))
        .unwrap_or(FALLBACK_HOST);

    format!("{}://{}", scheme, host)
}

/// First comma-separated entry of a header, as proxies append to these.
fn first_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Build the checkout-link response for `product_id`.
pub fn checkout_link_response(
    req: &Request<Body>,
    product_id: &str,
    trust_forwarded: bool,
) -> Response {
    let link = CheckoutLink::new(&request_origin(req, trust_forwarded), product_id);
    tracing::debug!(checkout_url = %link.checkout_url, "Generated checkout link");

    let mut response = (StatusCode::OK, Json(link)).into_response();
    cors::apply_cors(response.headers_mut());
    response
}
