//! REST client for the remote auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call fails with the generic
//! network error, since these endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures become `AuthError::Network`; HTTP statuses and bodies
//! are mapped by `session::api::decode_response`, so the browser and the CLI
//! report identical messages.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use session::api::{AuthApi, HEALTH_PATH, LOGIN_PATH, PROFILE_PATH, REGISTER_PATH, endpoint};
use session::{AuthError, AuthResponse, HealthResponse, LoginRequest, RegisterRequest, UserProfile};
#[cfg(feature = "hydrate")]
use session::Operation;

/// `gloo-net` backed [`AuthApi`].
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    #[cfg(feature = "hydrate")]
    async fn post_json<T: serde::Serialize>(
        &self,
        path: &str,
        op: Operation,
        body: &T,
    ) -> Result<AuthResponse, AuthError> {
        let request = gloo_net::http::Request::post(&self.url(path))
            .header("Accept", "application/json")
            .json(body)
            .map_err(|e| {
                leptos::logging::warn!("encode {op:?} request failed: {e}");
                AuthError::network()
            })?;
        let resp = request.send().await.map_err(|e| {
            leptos::logging::warn!("{op:?} request failed: {e}");
            AuthError::network()
        })?;
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        session::api::decode_response(op, status, &text)
    }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_json(LOGIN_PATH, Operation::Login, request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(LOGIN_PATH), request);
            Err(AuthError::network())
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_json(REGISTER_PATH, Operation::Register, request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(REGISTER_PATH), request);
            Err(AuthError::network())
        }
    }

    async fn profile(&self, token: &str) -> Result<UserProfile, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url(PROFILE_PATH))
                .header("Authorization", &session::api::bearer(token))
                .header("Accept", "application/json")
                .send()
                .await
                .map_err(|e| {
                    leptos::logging::warn!("profile request failed: {e}");
                    AuthError::network()
                })?;
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            session::api::decode_response(Operation::Profile, status, &text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(PROFILE_PATH), token);
            Err(AuthError::network())
        }
    }

    async fn health(&self) -> Result<HealthResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url(HEALTH_PATH))
                .send()
                .await
                .map_err(|_| AuthError::network())?;
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            session::api::decode_response(Operation::Health, status, &text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.url(HEALTH_PATH);
            Err(AuthError::network())
        }
    }
}
