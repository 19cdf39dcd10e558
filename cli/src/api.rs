//! `reqwest` implementation of the auth API.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures (connect, TLS, reading the body) become
//! `AuthError::Network`; HTTP statuses are mapped by
//! `session::api::decode_response` exactly as in the browser.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use reqwest::RequestBuilder;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use session::api::{self, HEALTH_PATH, LOGIN_PATH, PROFILE_PATH, REGISTER_PATH};
use session::{AuthApi, AuthError, AuthResponse, HealthResponse, LoginRequest, Operation, RegisterRequest, UserProfile};

#[derive(Clone, Debug)]
pub struct ReqwestAuthApi {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestAuthApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn url(&self, path: &str) -> String {
        api::endpoint(&self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, op: Operation, request: RequestBuilder) -> Result<T, AuthError> {
        let response = request.header(ACCEPT, "application/json").send().await.map_err(|e| {
            tracing::warn!(?op, error = %e, "auth api request failed");
            AuthError::network()
        })?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            tracing::warn!(?op, error = %e, "auth api body read failed");
            AuthError::network()
        })?;
        api::decode_response(op, status, &body)
    }
}

impl AuthApi for ReqwestAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AuthError> {
        let builder = self.client.post(self.url(LOGIN_PATH)).json(request);
        self.send(Operation::Login, builder).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AuthError> {
        let builder = self.client.post(self.url(REGISTER_PATH)).json(request);
        self.send(Operation::Register, builder).await
    }

    async fn profile(&self, token: &str) -> Result<UserProfile, AuthError> {
        let builder = self.client.get(self.url(PROFILE_PATH)).header(AUTHORIZATION, api::bearer(token));
        self.send(Operation::Profile, builder).await
    }

    async fn health(&self) -> Result<HealthResponse, AuthError> {
        let builder = self.client.get(self.url(HEALTH_PATH));
        self.send(Operation::Health, builder).await
    }
}
