//! Asynchronous admin API client implementation.
//!
//! The admin API is a single GET endpoint: the `action` query parameter
//! selects the remote operation and every argument travels as a further
//! query parameter. [`AdminClient::command`] owns that contract; the
//! wrapper methods in the sibling modules are thin call-sites of it.

use crate::Result;
use secrecy::{ExposeSecret, SecretString};
use solusvm_core::config::SolusConfig;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("solusvm-admin/", env!("CARGO_PKG_VERSION"));

/// Query keys the gateway reserves for itself.
///
/// Caller-supplied pairs under these names are discarded before the fixed
/// fields are appended, so credentials can never be overridden from a
/// parameter mapping.
pub const RESERVED_KEYS: [&str; 4] = ["action", "rdtype", "id", "key"];

/// Builder for [`AdminClient`].
#[derive(Debug, Clone)]
pub struct AdminClientBuilder {
    config: SolusConfig,
    endpoint: Option<String>,
}

impl AdminClientBuilder {
    /// Create a builder for the given master and API credential pair.
    ///
    /// Host and credentials are not validated here; a bad host surfaces as
    /// a transport error and bad credentials as an error status in the
    /// response body.
    pub fn new(
        host: impl Into<String>,
        api_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            config: SolusConfig::new(host, api_id, api_key),
            endpoint: None,
        }
    }

    /// Create a builder from an existing configuration.
    #[must_use]
    pub fn from_config(config: SolusConfig) -> Self {
        Self {
            config,
            endpoint: None,
        }
    }

    /// Override the admin API port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Override the request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.config.timeout_secs = seconds;
        self
    }

    /// Override the full command endpoint URL.
    ///
    /// Intended for tests and nonstandard deployments; the default is
    /// `https://{host}:{port}/api/admin/command.php`.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL cannot be formed or the HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<AdminClient> {
        let endpoint = match self.endpoint {
            Some(raw) => Url::parse(&raw)?,
            None => self.config.endpoint_url()?,
        };

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.config.timeout())
            .build()?;

        Ok(AdminClient {
            endpoint,
            api_id: self.config.api_id,
            api_key: SecretString::from(self.config.api_key),
            http,
        })
    }
}

/// Asynchronous SolusVM admin API client.
///
/// Stateless across calls beyond the immutable credentials; cloning is
/// cheap and clones share the underlying connection pool.
#[derive(Debug)]
pub struct AdminClient {
    endpoint: Url,
    api_id: String,
    api_key: SecretString,
    http: reqwest::Client,
}

impl Clone for AdminClient {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            api_id: self.api_id.clone(),
            api_key: SecretString::from(self.api_key.expose_secret().to_owned()),
            http: self.http.clone(),
        }
    }
}

impl AdminClient {
    /// Construct a client with default port and timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot form an endpoint URL.
    pub fn new(
        host: impl Into<String>,
        api_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self> {
        AdminClientBuilder::new(host, api_id, api_key).build()
    }

    /// Return the command endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Issue one admin API command and return the raw response body.
    ///
    /// The final query string is `params` with any [`RESERVED_KEYS`] pairs
    /// removed, followed by `action`, `rdtype=json`, and the credential
    /// fields. The body is returned as-is for any HTTP completion,
    /// including non-2xx statuses — the master's convention is to report
    /// success or failure inside the JSON body. Transport failures
    /// (connect, TLS, DNS, timeout) propagate as [`solusvm_core::Error`];
    /// there is no retry.
    pub async fn command(
        &self,
        action: &str,
        params: Vec<(&'static str, String)>,
    ) -> Result<String> {
        let mut query: Vec<(&str, String)> = params
            .into_iter()
            .filter(|(key, _)| !RESERVED_KEYS.contains(key))
            .collect();
        query.push(("action", action.to_string()));
        query.push(("rdtype", "json".to_string()));
        query.push(("id", self.api_id.clone()));
        query.push(("key", self.api_key.expose_secret().to_string()));

        debug!(action, "sending admin API command");

        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&query)
            .send()
            .await?;

        Ok(response.text().await?)
    }
}
