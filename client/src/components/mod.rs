//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and the protected-route guard while reading
//! the shared `AuthContext` from Leptos context.

pub mod access_gate;
pub mod auth_provider;
pub mod navbar;
pub mod toasts;
