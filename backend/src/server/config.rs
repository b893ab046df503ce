//! HTTP server configuration object.

use std::net::SocketAddr;

use storefront::config::StorefrontSettings;

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) seed_fixtures: bool,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            seed_fixtures: false,
        }
    }

    /// Load the demo catalogue and demo tokens before serving.
    #[must_use]
    pub fn with_seed_fixtures(mut self, seed_fixtures: bool) -> Self {
        self.seed_fixtures = seed_fixtures;
        self
    }

    /// Build from loaded settings.
    pub fn from_settings(settings: &StorefrontSettings) -> std::io::Result<Self> {
        let bind_addr = settings
            .bind_addr()
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;
        Ok(Self::new(bind_addr).with_seed_fixtures(settings.seed_fixtures))
    }
}
