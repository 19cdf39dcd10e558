//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the browser implementation of `session::AuthApi`; the wire schema
//! itself lives in the `session` crate so the CLI shares it.

pub mod api;
