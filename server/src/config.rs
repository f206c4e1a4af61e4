//! Server configuration parsed from environment variables.
//!
//! Parsing goes through a lookup closure so tests can feed a fixed map
//! instead of mutating process-wide environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// Errors produced while reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Where songs are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// In-process store; contents are lost on restart.
    Memory,
    /// Postgres at the given connection URL.
    Postgres { url: String, max_connections: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub store: StoreBackend,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `DATABASE_URL`: Postgres when set, in-memory store otherwise
    /// - `DB_MAX_CONNECTIONS`: default 5, ignored when unparsable
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an unparsable `PORT` or `BIND_ADDR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::Invalid { var: "BIND_ADDR", value: raw })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let store = match lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => StoreBackend::Postgres {
                url,
                max_connections: lookup("DB_MAX_CONNECTIONS")
                    .and_then(|v| v.parse::<u32>().ok())
                    .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
            },
            None => StoreBackend::Memory,
        };

        Ok(Self { bind_addr, port, store })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
