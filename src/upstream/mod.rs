//! Upstream API subsystem.
//!
//! # Data Flow
//! ```text
//! Request (method, path+query, headers, body stream)
//!     → client.rs (target = base + path+query, single attempt)
//!     → upstream response (status, headers, body stream)
//!     → CORS overlay → client
//!
//! On transport failure:
//!     → UpstreamError → 500 JSON response (never propagated further)
//! ```
//!
//! # Design Decisions
//! - One attempt, no retries, no timeout beyond transport defaults
//! - Bodies are streamed in both directions, never buffered
//! - Redirects are relayed to the caller, not followed

pub mod client;

pub use client::{UpstreamClient, UpstreamError};
