//! Server configuration for the `CodeGuardian AI` landing site.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Server settings use the `CODEGUARDIAN_*` prefix; the install link is
//! configured through the `GITHUB_APP_*` variables shared with the CLI.

use std::net::SocketAddr;

use codeguardian_core::{InstallUrl, InstallUrlError};

/// Default listener address.
const DEFAULT_BIND: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

/// Default cap on requests handled at once.
const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 512;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
    /// Explicit GitHub App install URL, if configured.
    pub install_url: Option<String>,
    /// GitHub App slug used to build the install URL when no URL is given.
    pub app_slug: Option<String>,
    /// Maximum number of requests processed concurrently.
    pub max_concurrent_requests: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT`: port to bind on (platform convention, binds to `0.0.0.0`)
    /// - `CODEGUARDIAN_BIND_ADDR`: full bind address (overrides `PORT`, default: `127.0.0.1:3000`)
    /// - `CODEGUARDIAN_LOG_LEVEL`: log filter (default: `info`)
    /// - `CODEGUARDIAN_MAX_CONCURRENCY`: concurrent request cap (default: `512`)
    /// - `GITHUB_APP_INSTALL_URL`: install link target
    /// - `GITHUB_APP_SLUG`: GitHub App slug, used when no install URL is set
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default_addr = SocketAddr::from(DEFAULT_BIND);

        // Priority: CODEGUARDIAN_BIND_ADDR > PORT > default 127.0.0.1:3000
        let bind_addr = if let Some(addr) = lookup("CODEGUARDIAN_BIND_ADDR") {
            addr.parse().unwrap_or(default_addr)
        } else if let Some(port) = lookup("PORT") {
            port.parse::<u16>()
                .map_or(default_addr, |port| SocketAddr::from(([0, 0, 0, 0], port)))
        } else {
            default_addr
        };

        let log_level = lookup("CODEGUARDIAN_LOG_LEVEL").unwrap_or_else(|| "info".to_owned());

        let max_concurrent_requests = lookup("CODEGUARDIAN_MAX_CONCURRENCY")
            .and_then(|v| v.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(DEFAULT_MAX_CONCURRENT_REQUESTS);

        Self {
            bind_addr,
            log_level,
            install_url: lookup("GITHUB_APP_INSTALL_URL"),
            app_slug: lookup("GITHUB_APP_SLUG"),
            max_concurrent_requests,
        }
    }

    /// Resolve the install URL the landing page links to.
    ///
    /// # Errors
    ///
    /// Returns [`InstallUrlError`] if the configured URL or slug is invalid.
    pub fn install_url(&self) -> Result<InstallUrl, InstallUrlError> {
        InstallUrl::resolve(self.install_url.as_deref(), self.app_slug.as_deref())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
