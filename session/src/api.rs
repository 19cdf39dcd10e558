//! Remote auth API seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser adapter (`gloo-net`) lives in `client`, the native one
//! (`reqwest`) in `cli`. Both share the endpoint paths below and map HTTP
//! statuses through [`AuthError::from_status`].

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::error::{AuthError, Operation};
use crate::types::{AuthResponse, HealthResponse, LoginRequest, MessageBody, RegisterRequest, UserProfile};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const PROFILE_PATH: &str = "/api/user/profile";
pub const HEALTH_PATH: &str = "/health";

/// Join an API base URL and an endpoint path without doubling slashes.
#[must_use]
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Turn a raw HTTP status and body into the endpoint's result.
///
/// 2xx bodies must decode as `T`; anything else goes through
/// [`AuthError::from_status`] with the body's `message`, if it has one.
///
/// # Errors
///
/// Returns the mapped [`AuthError`] for non-2xx statuses, or
/// [`AuthError::Server`] when a 2xx body does not decode.
pub fn decode_response<T: DeserializeOwned>(op: Operation, status: u16, body: &str) -> Result<T, AuthError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| {
            tracing::warn!(?op, error = %e, "undecodable success body");
            AuthError::Server(op.try_again_message())
        });
    }
    Err(AuthError::from_status(op, status, MessageBody::message_from(body)))
}

/// Operations consumed from the remote auth service.
///
/// Futures are not required to be `Send`: the browser runs everything on one
/// thread and the controller never moves across threads.
pub trait AuthApi {
    /// `POST /api/auth/login`.
    fn login(&self, request: &LoginRequest) -> impl Future<Output = Result<AuthResponse, AuthError>>;

    /// `POST /api/auth/register`.
    fn register(&self, request: &RegisterRequest) -> impl Future<Output = Result<AuthResponse, AuthError>>;

    /// `GET /api/user/profile` with `Authorization: Bearer <token>`.
    fn profile(&self, token: &str) -> impl Future<Output = Result<UserProfile, AuthError>>;

    /// `GET /health`.
    fn health(&self) -> impl Future<Output = Result<HealthResponse, AuthError>>;
}

/// Query the liveness endpoint once and log the outcome.
///
/// Never fails: an unreachable or unhealthy service is a warning, not an
/// error. Returns whether the service reported itself healthy.
pub async fn probe_health<A: AuthApi>(api: &A) -> bool {
    match api.health().await {
        Ok(resp) if resp.is_healthy() => {
            tracing::info!(health = %resp.health, "auth api healthy");
            true
        }
        Ok(resp) => {
            tracing::warn!(health = %resp.health, "auth api reports degraded health");
            false
        }
        Err(e) => {
            tracing::warn!(error = %e, "auth api health probe failed");
            false
        }
    }
}
