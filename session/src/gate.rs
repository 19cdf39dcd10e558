//! Access-gate decision for protected routes.
//!
//! The gate consumes `SessionStatus`; it never changes it. Rendering (spinner,
//! redirect, protected view) is the UI's job.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::controller::SessionStatus;

pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";
pub const SIGNUP_ROUTE: &str = "/signup";

/// What a protected route should do for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Validation in flight: show a loading indicator, decide later.
    Loading,
    /// Send the user to `to`, remembering the path they asked for.
    Redirect { to: &'static str, from: String },
    /// Render the protected view.
    Render,
}

/// Decide how a navigation to `requested_path` is handled.
#[must_use]
pub fn decide(status: SessionStatus, requested_path: &str) -> GateDecision {
    match status {
        SessionStatus::Validating => GateDecision::Loading,
        SessionStatus::Unauthenticated => GateDecision::Redirect {
            to: LOGIN_ROUTE,
            from: requested_path.to_owned(),
        },
        SessionStatus::Authenticated => GateDecision::Render,
    }
}

/// Accept `path` as a post-login destination only if it is a local absolute
/// path that does not lead back into the auth pages.
#[must_use]
pub fn sanitize_return_path(path: &str) -> Option<String> {
    let path = path.trim();
    if !path.starts_with('/') || path.starts_with("//") || path.contains('\\') {
        return None;
    }
    let route = path.split(['?', '#']).next().unwrap_or(path).trim_end_matches('/');
    if route.is_empty() {
        // `/` itself is the default destination; nothing to remember.
        return None;
    }
    if [LOGIN_ROUTE, SIGNUP_ROUTE].contains(&route) {
        return None;
    }
    Some(path.to_owned())
}
