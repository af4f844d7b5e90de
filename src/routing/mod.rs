//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (ordered route table)
//!     → matcher.rs (evaluate each predicate, capture path params)
//!     → Return: first matched Route + captures, or NoMatch
//! ```
//!
//! # Design Decisions
//! - Route table built at startup, immutable at runtime
//! - No regex in hot path (prefix and digit scans only)
//! - Deterministic: same input always matches same route
//! - First match wins (table order is priority order)

pub mod matcher;
pub mod router;

pub use matcher::{Captures, CheckoutLinkMatcher, Matcher, MethodMatcher, PathPrefixMatcher};
pub use router::{Handler, RouteMatch, Router};
