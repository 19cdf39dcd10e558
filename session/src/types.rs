//! Wire DTOs for the remote auth API.
//!
//! DESIGN
//! ======
//! Field names follow the API's camelCase JSON. Optional fields tolerate both
//! absence and `null` so error bodies (`{"token": null, "message": ...}`) and
//! success bodies decode into the same shapes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Role string the API reports for administrators.
const ADMIN_ROLE: &str = "admin";

/// Authenticated user as returned by `GET /api/user/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: String,
}

impl UserProfile {
    /// First and last name joined with a single space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case(ADMIN_ROLE)
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Response of the login and register endpoints.
///
/// Successful responses carry a token; error responses reuse the shape with
/// `token: null` and a human-readable message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthResponse {
    /// The issued token, if present and non-empty.
    #[must_use]
    pub fn issued_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.trim().is_empty())
    }
}

/// Generic `{ "message": ... }` error body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageBody {
    /// Parse an error body, returning the message when the body is JSON with
    /// a non-empty `message` field.
    #[must_use]
    pub fn message_from(raw: &str) -> Option<String> {
        serde_json::from_str::<Self>(raw)
            .ok()
            .and_then(|body| body.message)
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty())
    }
}

/// Response of `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    pub health: String,
}

impl HealthResponse {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.health.eq_ignore_ascii_case("healthy")
    }
}
