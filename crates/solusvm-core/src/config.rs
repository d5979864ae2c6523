//! Configuration for SolusVM client instances.
//!
//! A SolusVM master exposes its admin API on a fixed HTTPS port and path;
//! the configuration here carries the master's hostname, the API credential
//! pair, and the request timeout. Host and credentials are deliberately not
//! validated at construction time — a malformed host or a revoked key is
//! only discovered when the network call fails or the master rejects the
//! request, matching the behavior of the API itself.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Default port the admin API listens on.
pub const DEFAULT_ADMIN_PORT: u16 = 5656;

/// Path of the admin command endpoint.
pub const ADMIN_COMMAND_PATH: &str = "/api/admin/command.php";

/// Default request timeout in seconds.
///
/// The admin API answers quickly or not at all; a short bound keeps callers
/// from hanging on an unreachable master.
pub const DEFAULT_TIMEOUT_SECS: u64 = 2;

/// Configuration for a SolusVM admin client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SolusConfig {
    /// SolusVM master FQDN (e.g. "solusvm.example.com")
    pub host: String,

    /// API authentication ID hash
    pub api_id: String,

    /// API authentication key hash
    pub api_key: String,

    /// Admin API port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_port() -> u16 {
    DEFAULT_ADMIN_PORT
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl SolusConfig {
    /// Create a configuration for the given master and credential pair.
    pub fn new(
        host: impl Into<String>,
        api_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            api_id: api_id.into(),
            api_key: api_key.into(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Override the admin API port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Override the request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build the full admin command endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] if the host cannot form a URL.
    pub fn endpoint_url(&self) -> Result<Url, Error> {
        let endpoint = format!(
            "https://{}:{}{}",
            self.host, self.port, ADMIN_COMMAND_PATH
        );
        Ok(Url::parse(&endpoint)?)
    }
}
