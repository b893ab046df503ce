//! Runtime settings loaded via OrthoConfig.
//!
//! Values come from `STOREFRONT_*` environment variables, configuration files
//! and command-line flags, layered by `ortho_config`.

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Log output formats understood by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Plain,
}

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("invalid host address: {0}")]
    InvalidHost(String),
    #[error("unknown log format: {0} (expected json or plain)")]
    UnknownLogFormat(String),
}

impl FromStr for LogFormat {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "plain" => Ok(Self::Plain),
            other => Err(SettingsError::UnknownLogFormat(other.to_owned())),
        }
    }
}

/// Storefront process settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STOREFRONT")]
pub struct StorefrontSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// `json` or `plain`.
    pub log_format: Option<String>,
    /// Load the demo catalogue and demo bearer tokens on startup.
    #[ortho_config(default = false)]
    pub seed_fixtures: bool,
}

impl StorefrontSettings {
    /// Socket address assembled from `host` and `port`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        let ip = IpAddr::from_str(host.trim())
            .map_err(|_| SettingsError::InvalidHost(host.to_owned()))?;
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    pub fn log_format(&self) -> Result<LogFormat, SettingsError> {
        self.log_format
            .as_deref()
            .map_or(Ok(LogFormat::default()), LogFormat::from_str)
    }
}
