//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the ordered route table
//! - Look up the first matching route for a request
//! - Return matched route or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan in table order (three routes)
//! - Explicit NoMatch rather than silent default

use axum::body::Body;
use axum::http::{Method, Request};

use crate::routing::matcher::{
    Captures, CheckoutLinkMatcher, Matcher, MethodMatcher, PathPrefixMatcher,
};

/// Path prefix relayed to the upstream API.
pub const UPSTREAM_PATH_PREFIX: &str = "/api/v2";

/// Behavior selected for a matched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// Answer a CORS preflight locally.
    Preflight,
    /// Synthesize a checkout link from the `product_id` capture.
    CheckoutLink,
    /// Relay the request to the upstream API.
    Forward,
}

/// A single entry in the route table.
#[derive(Debug)]
pub struct Route {
    pub name: &'static str,
    pub matcher: Box<dyn Matcher>,
    pub handler: Handler,
}

/// Result of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub name: &'static str,
    pub handler: Handler,
    pub captures: Captures,
}

/// Ordered route table; first match wins.
#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Build a router from an explicit route list, evaluated in order.
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// The proxy's route table: preflight, checkout link, upstream relay.
    pub fn standard() -> Self {
        Self::new(vec![
            Route {
                name: "preflight",
                matcher: Box::new(MethodMatcher::new(Method::OPTIONS)),
                handler: Handler::Preflight,
            },
            Route {
                name: "checkout-link",
                matcher: Box::new(CheckoutLinkMatcher::new()),
                handler: Handler::CheckoutLink,
            },
            Route {
                name: "upstream",
                matcher: Box::new(PathPrefixMatcher::new(UPSTREAM_PATH_PREFIX)),
                handler: Handler::Forward,
            },
        ])
    }

    /// Find the first route whose matcher accepts the request.
    pub fn match_request(&self, req: &Request<Body>) -> Option<RouteMatch> {
        self.routes.iter().find_map(|route| {
            route.matcher.matches(req).map(|captures| RouteMatch {
                name: route.name,
                handler: route.handler,
                captures,
            })
        })
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::standard()
    }
}
