//! CORS-opening reverse proxy in front of the DeltaPag API.
//!
//! Requests under `/api/v2` are relayed to the upstream API with permissive
//! cross-origin headers added to the response. Preflights are answered
//! locally, and `/api/generate-checkout-link/<id>` builds a checkout URL on
//! the proxy's own origin without contacting the upstream.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod upstream;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
