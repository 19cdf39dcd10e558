//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and validation, and hands session work to
//! `AuthContext`. Protected pages are wrapped in `AccessGate` by the router.

pub mod home;
pub mod login;
pub mod property;
pub mod signup;
