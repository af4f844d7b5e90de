//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, single catch-all dispatch handler)
//!     → [routing table picks a handler]
//!         - cors.rs      preflight answered locally
//!         - checkout.rs  checkout link synthesized locally
//!         - upstream     relayed, then cors.rs overlay
//!     → response.rs (404 / upstream failure responses)
//!     → Send to client
//! ```

pub mod checkout;
pub mod cors;
pub mod response;
pub mod server;

pub use server::{AppState, HttpServer};
