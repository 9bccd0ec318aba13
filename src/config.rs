//! Environment-driven configuration

use crate::menu::DEFAULT_ENTRY_CODE;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_URL: &str = "http://localhost:3000/api/ussd";
pub const DEFAULT_PHONE_NUMBER: &str = "243812345678";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {name} value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
    pub entry_code: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            entry_code: DEFAULT_ENTRY_CODE.to_string(),
        }
    }
}

impl ServerConfig {
    /// Read `USSD_BIND`, `USSD_PORT` and `USSD_ENTRY_CODE`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let bind = match lookup("USSD_BIND") {
            Some(value) => value.parse::<IpAddr>().map_err(|e| {
                ConfigError::Invalid {
                    name: "USSD_BIND",
                    value,
                    reason: e.to_string(),
                }
            })?,
            None => defaults.bind,
        };

        let port = match lookup("USSD_PORT") {
            Some(value) => value.parse::<u16>().map_err(|e| {
                ConfigError::Invalid {
                    name: "USSD_PORT",
                    value,
                    reason: e.to_string(),
                }
            })?,
            None => defaults.port,
        };

        let entry_code = lookup("USSD_ENTRY_CODE")
            .filter(|code| !code.trim().is_empty())
            .unwrap_or(defaults.entry_code);

        Ok(Self {
            bind,
            port,
            entry_code,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

/// Terminal emulator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmulatorConfig {
    /// Full URL of the USSD endpoint
    pub url: String,
    pub phone_number: String,
    /// Service code sent on every step after the first
    pub entry_code: String,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            phone_number: DEFAULT_PHONE_NUMBER.to_string(),
            entry_code: DEFAULT_ENTRY_CODE.to_string(),
        }
    }
}

impl EmulatorConfig {
    /// Read `USSD_URL`, `USSD_PHONE_NUMBER` and `USSD_ENTRY_CODE`.
    /// A URL passed on the command line takes precedence over `USSD_URL`.
    pub fn from_env(url_arg: Option<String>) -> Self {
        Self::from_lookup(url_arg, |key| std::env::var(key).ok())
    }

    fn from_lookup(url_arg: Option<String>, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            url: url_arg
                .or_else(|| lookup("USSD_URL"))
                .unwrap_or(defaults.url),
            phone_number: lookup("USSD_PHONE_NUMBER").unwrap_or(defaults.phone_number),
            entry_code: lookup("USSD_ENTRY_CODE")
                .filter(|code| !code.trim().is_empty())
                .unwrap_or(defaults.entry_code),
        }
    }
}
