//! Error taxonomy for session operations.
//!
//! ERROR HANDLING
//! ==============
//! Every failure the remote API can produce is folded into one of four
//! message-carrying variants. Two more variants are produced by the
//! controller itself and never come off the wire. `Display` is always the
//! user-facing message, so callers can toast `err.to_string()` directly.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Message shown when the request never reached the server.
pub const NETWORK_MESSAGE: &str = "Network error. Please check your connection.";

/// Message shown when a profile fetch is rejected with 401/403.
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please login again.";

/// Message shown for credential failures that carry no server message.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

const BUSY_MESSAGE: &str = "Please wait for the current request to finish.";
const SUPERSEDED_MESSAGE: &str = "Request superseded by a newer session change.";

/// Remote operation an error originated from. Selects fallback messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Login,
    Register,
    Profile,
    Health,
}

impl Operation {
    fn failed_label(self) -> &'static str {
        match self {
            Self::Login => "Login failed",
            Self::Register => "Registration failed",
            Self::Profile => "Failed to fetch profile",
            Self::Health => "Health check failed",
        }
    }

    /// Retryable message used for 5xx responses without a server message.
    #[must_use]
    pub fn try_again_message(self) -> String {
        format!("{}. Please try again later.", self.failed_label())
    }
}

/// Discriminant of [`AuthError`], for callers that branch on the class only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Validation,
    Auth,
    Server,
    Busy,
    Superseded,
}

/// A failed session operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No response reached the client.
    #[error("{0}")]
    Network(String),
    /// 400-class rejection; the message is the server's, verbatim.
    #[error("{0}")]
    Validation(String),
    /// Bad credentials, disabled account, or an expired/invalid token.
    #[error("{0}")]
    Auth(String),
    /// 5xx or an otherwise unusable response.
    #[error("{0}")]
    Server(String),
    /// Another login/signup/initialize is still in flight.
    #[error("{BUSY_MESSAGE}")]
    Busy,
    /// A later transition (usually logout) invalidated this operation.
    #[error("{SUPERSEDED_MESSAGE}")]
    Superseded,
}

impl AuthError {
    /// Transport-level failure with the generic connectivity message.
    #[must_use]
    pub fn network() -> Self {
        Self::Network(NETWORK_MESSAGE.to_owned())
    }

    /// Map a non-success HTTP status to an error.
    ///
    /// `server_message` is the `message` field of the response body, if any.
    #[must_use]
    pub fn from_status(op: Operation, status: u16, server_message: Option<String>) -> Self {
        let server_message = server_message.filter(|m| !m.trim().is_empty());
        match status {
            400 | 409 | 422 => {
                Self::Validation(server_message.unwrap_or_else(|| op.failed_label().to_owned()))
            }
            401 | 403 if op == Operation::Profile => Self::Auth(SESSION_EXPIRED_MESSAGE.to_owned()),
            401 | 403 => Self::Auth(server_message.unwrap_or_else(|| match op {
                Operation::Login => INVALID_CREDENTIALS_MESSAGE.to_owned(),
                _ => op.failed_label().to_owned(),
            })),
            _ => Self::Server(server_message.unwrap_or_else(|| op.try_again_message())),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::Network,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Auth(_) => ErrorKind::Auth,
            Self::Server(_) => ErrorKind::Server,
            Self::Busy => ErrorKind::Busy,
            Self::Superseded => ErrorKind::Superseded,
        }
    }

    /// Whether retrying the same request later may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Network | ErrorKind::Server | ErrorKind::Busy)
    }

    /// Whether the error should be reported to the user at all.
    #[must_use]
    pub fn is_user_visible(&self) -> bool {
        self.kind() != ErrorKind::Superseded
    }
}
