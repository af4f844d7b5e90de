//! Outbound HTTP client for the upstream API.

use std::error::Error as _;

use axum::body::{Body, HttpBody};
use axum::http::{Request, Response};
use hyper::ext::ReasonPhrase;
use reqwest::redirect::Policy;
use thiserror::Error;

use crate::config::UpstreamConfig;
use crate::http::cors;

/// Errors raised while talking to the upstream.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The HTTP client could not be constructed.
    #[error("failed to build upstream client: {0}")]
    Client(#[source] reqwest::Error),

    /// The rewritten target is not a valid URL.
    #[error("invalid upstream target '{0}'")]
    InvalidTarget(String),

    /// DNS, connect, TLS or stream failure during the exchange.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl UpstreamError {
    /// Display text of the error followed by every underlying cause.
    pub fn message(&self) -> String {
        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

/// Relays requests to a fixed upstream base URL.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    base: String,
    client: reqwest::Client,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .no_proxy()
            .build()
            .map_err(UpstreamError::Client)?;

        Ok(Self {
            base: config.base().to_string(),
            client,
        })
    }

    /// Upstream URL for an incoming path and query, passed through unmodified.
    pub fn target_url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base, path_and_query)
    }

    /// Forward a request and relay the upstream response with the CORS overlay.
    pub async fn forward(&self, request: Request<Body>) -> Result<Response<Body>, UpstreamError> {
        let (parts, body) = request.into_parts();
        let path_and_query = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| parts.uri.path());
        let target = self.target_url(path_and_query);
        let url = reqwest::Url::parse(&target)
            .map_err(|_| UpstreamError::InvalidTarget(target.clone()))?;

        tracing::debug!(method = %parts.method, target = %target, "Forwarding to upstream");

        let mut outbound = self
            .client
            .request(parts.method, url)
            .headers(parts.headers);
        // A bodiless GET must not turn into an empty chunked upload.
        if !body.is_end_stream() {
            outbound = outbound.body(reqwest::Body::wrap_stream(body.into_data_stream()));
        }

        let upstream = outbound.send().await?;

        let status = upstream.status();
        let headers = upstream.headers().clone();
        let reason = upstream.extensions().get::<ReasonPhrase>().cloned();
        tracing::debug!(status = %status, "Upstream responded");

        let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        // Non-canonical status text only survives as a hyper extension.
        if let Some(reason) = reason {
            response.extensions_mut().insert(reason);
        }
        cors::apply_cors(response.headers_mut());
        Ok(response)
    }
}
