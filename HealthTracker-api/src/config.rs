//! Server configuration read from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use chrono::{FixedOffset, Offset, Utc};
use thiserror::Error;

/// Largest accepted UTC offset, in minutes
pub const MAX_UTC_OFFSET_MINUTES: i32 = 1439;

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A variable could not be parsed
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: String, value: String },

    /// A variable parsed but lies outside its range
    #[error("{name} out of range: {value} (expected {expected})")]
    OutOfRange {
        name: String,
        value: String,
        expected: String,
    },
}

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Address to bind
    pub host: IpAddr,
    /// Port to bind
    pub port: u16,
    /// Owner offset used when a request does not carry one
    pub default_offset: FixedOffset,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            default_offset: Utc.fix(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(value) => value.parse::<IpAddr>().map_err(|_| ConfigError::InvalidValue {
                name: "HOST".to_string(),
                value,
            })?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                value,
            })?,
            None => defaults.port,
        };

        let default_offset = match lookup("DEFAULT_UTC_OFFSET_MINUTES") {
            Some(value) => {
                let minutes = value.parse::<i32>().map_err(|_| ConfigError::InvalidValue {
                    name: "DEFAULT_UTC_OFFSET_MINUTES".to_string(),
                    value: value.clone(),
                })?;
                offset_from_minutes(minutes).ok_or_else(|| ConfigError::OutOfRange {
                    name: "DEFAULT_UTC_OFFSET_MINUTES".to_string(),
                    value,
                    expected: format!("-{0}..={0}", MAX_UTC_OFFSET_MINUTES),
                })?
            }
            None => defaults.default_offset,
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Self {
            host,
            port,
            default_offset,
            log_level,
        })
    }

    /// Address the server binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Offset for a number of minutes east of UTC, if within ±1439
pub fn offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    if !(-MAX_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES).contains(&minutes) {
        return None;
    }
    FixedOffset::east_opt(minutes * 60)
}
