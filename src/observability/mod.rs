//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! dispatch + upstream client
//!     → tracing events (route decisions, upstream status, failures)
//! tower-http TraceLayer
//!     → one span per request
//! logging.rs
//!     → fmt subscriber on stdout, filtered by RUST_LOG or config level
//! ```

pub mod logging;

pub use logging::init_logging;
