//! # client
//!
//! Leptos + WASM application shell for Property Pulse.
//!
//! This crate contains pages, components, the shared auth context, and the
//! browser adapters (`localStorage` token store, `gloo-net` API client) that
//! plug into the `session` crate's `SessionController`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
