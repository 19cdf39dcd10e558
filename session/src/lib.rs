//! Client-side authentication session core.
//!
//! This crate owns the session state machine shared by the browser `client`
//! and the native `cli`. It has no UI and performs no I/O of its own: token
//! persistence comes in through [`SessionStore`], the remote auth API through
//! [`AuthApi`], and everything the UI needs to hear about (snapshots, notices,
//! navigation) goes out through [`SessionHost`].
//!
//! ARCHITECTURE
//! ============
//! `SessionStore` (leaf) <- `SessionController` <- access gate. The controller
//! is the only writer of session state; the gate in [`gate`] is a pure
//! decision over the controller's published status.

pub mod api;
pub mod controller;
pub mod error;
pub mod gate;
pub mod store;
pub mod types;

#[cfg(test)]
mod testing;

pub use api::AuthApi;
pub use controller::{Notice, NoticeLevel, SessionController, SessionHost, SessionSnapshot, SessionStatus};
pub use error::{AuthError, ErrorKind, Operation};
pub use gate::GateDecision;
pub use store::{MemoryStore, SessionStore, TOKEN_KEY};
pub use types::{AuthResponse, HealthResponse, LoginRequest, MessageBody, RegisterRequest, UserProfile};
