//! Route matching logic.
//!
//! # Responsibilities
//! - Match request method (preflight detection)
//! - Match path prefix (case-sensitive)
//! - Match the checkout-link path and capture its product id
//!
//! # Design Decisions
//! - Path matching is case-sensitive, no trailing-slash normalization
//! - Captured values are kept as raw strings (no numeric parsing)
//! - No regex to guarantee O(n) matching

use axum::body::Body;
use axum::http::{Method, Request};

/// Path prefix of the checkout-link endpoint; the product id follows it.
pub const CHECKOUT_LINK_PREFIX: &str = "/api/generate-checkout-link/";

/// Values captured from the request path by a matcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures(Vec<(&'static str, String)>);

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.0.push((name, value.into()));
        self
    }

    /// Look up a captured value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Trait for matching requests against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns the captured path values if the request matches this condition.
    fn matches(&self, req: &Request<Body>) -> Option<Captures>;
}

/// Matches the request method exactly.
#[derive(Debug, Clone)]
pub struct MethodMatcher {
    method: Method,
}

impl MethodMatcher {
    pub fn new(method: Method) -> Self {
        Self { method }
    }
}

impl Matcher for MethodMatcher {
    fn matches(&self, req: &Request<Body>) -> Option<Captures> {
        (req.method() == self.method).then(Captures::new)
    }
}

/// Matches the request path prefix.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Matcher for PathPrefixMatcher {
    fn matches(&self, req: &Request<Body>) -> Option<Captures> {
        req.uri().path().starts_with(&self.prefix).then(Captures::new)
    }
}

/// Matches `/api/generate-checkout-link/<digits>` and captures `product_id`.
#[derive(Debug, Clone, Default)]
pub struct CheckoutLinkMatcher;

impl CheckoutLinkMatcher {
    pub const PRODUCT_ID: &'static str = "product_id";

    pub fn new() -> Self {
        Self
    }
}

impl Matcher for CheckoutLinkMatcher {
    fn matches(&self, req: &Request<Body>) -> Option<Captures> {
        let id = req.uri().path().strip_prefix(CHECKOUT_LINK_PREFIX)?;
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Captures::new().with(Self::PRODUCT_ID, id))
    }
}
