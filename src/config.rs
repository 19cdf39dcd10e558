//! Host process configuration from the environment.
//!
//! ERROR HANDLING
//! ==============
//! Unset variables fall back to defaults; set-but-invalid values are errors so
//! a typo in `PORT` fails startup instead of binding somewhere unexpected.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT `{0}`")]
    InvalidPort(String),
    #[error("invalid HOST `{0}`")]
    InvalidHost(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub addr: SocketAddr,
}

impl HostConfig {
    /// Read `HOST` and `PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let ip = match lookup("HOST").map(|raw| raw.trim().to_owned()).filter(|raw| !raw.is_empty()) {
            Some(raw) => raw.parse::<IpAddr>().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match lookup("PORT").map(|raw| raw.trim().to_owned()).filter(|raw| !raw.is_empty()) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { addr: SocketAddr::new(ip, port) })
    }
}
