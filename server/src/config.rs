//! Server configuration parsed from environment variables.
//!
//! A `.env` file in the working directory is loaded first (see `main`), so
//! every value below can also be set there. Leptos build options (output
//! name, site root) come separately from `[[workspace.metadata.leptos]]`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Gzip responses for clients that accept it.
    pub compression: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT, compression: true }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `BIND_ADDR`: listen address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `COMPRESSION`: `1/true/yes/on` or `0/false/no/off`, default on
    ///
    /// # Errors
    ///
    /// Returns `ServerError::InvalidEnv` when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ServerError> {
        let bind_addr = parse_bind_addr(std::env::var("BIND_ADDR").ok().as_deref())?;
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let compression = parse_flag("COMPRESSION", std::env::var("COMPRESSION").ok().as_deref())?
            .unwrap_or(true);
        Ok(Self { bind_addr, port, compression })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_bind_addr(raw: Option<&str>) -> Result<IpAddr, ServerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_BIND_ADDR),
        Some(value) => value.parse().map_err(|_| ServerError::InvalidEnv {
            var: "BIND_ADDR",
            value: value.to_owned(),
            reason: "expected an IP address",
        }),
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ServerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ServerError::InvalidEnv {
            var: "PORT",
            value: value.to_owned(),
            reason: "expected a port number 0-65535",
        }),
    }
}

/// Parse an on/off switch. Unset or blank yields `None`.
fn parse_flag(var: &'static str, raw: Option<&str>) -> Result<Option<bool>, ServerError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(ServerError::InvalidEnv { var, value: value.to_owned(), reason: "expected a boolean" }),
    }
}
