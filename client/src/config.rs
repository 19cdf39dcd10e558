//! Build-time client configuration.
//!
//! The API base URL is baked in at compile time from
//! `PROPERTY_PULSE_API_URL`, since a WASM bundle has no process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API origin used when `PROPERTY_PULSE_API_URL` is unset at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// How long a toast stays on screen before it is dismissed.
pub const NOTICE_TTL_MS: u32 = 4_000;

/// Base URL of the remote auth API.
pub fn api_base_url() -> &'static str {
    resolve_api_url(option_env!("PROPERTY_PULSE_API_URL"))
}

fn resolve_api_url(raw: Option<&'static str>) -> &'static str {
    raw.map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
}
