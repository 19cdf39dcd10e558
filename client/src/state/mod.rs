//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` wraps the session controller in a copyable context handle;
//! `notices` is the toast queue the controller reports into.

pub mod auth;
pub mod notices;
