//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with a single catch-all handler
//! - Wire up middleware (request tracing)
//! - Dispatch requests through the route table
//! - Turn upstream failures into 500 responses
//! - Serve until the shutdown broadcast fires

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    routing::any,
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::ProxyConfig;
use crate::http::{checkout, cors, response};
use crate::routing::{CheckoutLinkMatcher, Handler, Router as ProxyRouter};
use crate::upstream::{UpstreamClient, UpstreamError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<ProxyRouter>,
    pub upstream: UpstreamClient,
    pub trust_forwarded_headers: bool,
}

/// HTTP server for the proxy.
pub struct HttpServer {
    router: Router,
    config: Arc<ProxyConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Result<Self, UpstreamError> {
        let state = AppState {
            router: Arc::new(ProxyRouter::standard()),
            upstream: UpstreamClient::new(&config.upstream)?,
            trust_forwarded_headers: config.listener.trust_forwarded_headers,
        };

        Ok(Self {
            router: Self::build_router(state),
            config: Arc::new(config),
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch))
            .route("/", any(dispatch))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until a shutdown signal is broadcast.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The Axum router, for driving the proxy without a socket.
    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Main dispatch handler.
/// Looks up the route and runs its behavior.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let Some(route) = state.router.match_request(&request) else {
        tracing::debug!(method = %method, path = %path, "No route matched");
        return response::not_found();
    };

    tracing::debug!(
        route = route.name,
        method = %method,
        path = %path,
        "Dispatching request"
    );

    match route.handler {
        Handler::Preflight => cors::preflight_response(),
        Handler::CheckoutLink => match route.captures.get(CheckoutLinkMatcher::PRODUCT_ID) {
            Some(product_id) => checkout::checkout_link_response(
                &request,
                product_id,
                state.trust_forwarded_headers,
            ),
            None => response::not_found(),
        },
        Handler::Forward => match state.upstream.forward(request).await {
            Ok(response) => response,
            Err(e) => {
                let message = e.message();
                tracing::warn!(method = %method, path = %path, error = %message, "Upstream request failed");
                response::upstream_error(&message)
            }
        },
    }
}
