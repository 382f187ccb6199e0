//! Namecheap DNS Provider

mod http;
mod provider;

use std::time::Duration;

use reqwest::Client;

use crate::error::Result;
use crate::http_client::{DEFAULT_REQUEST_TIMEOUT_SECS, create_http_client};
use crate::types::NamecheapCredentials;

pub use http::build_set_hosts_body;

pub(crate) const PROVIDER_NAME: &str = "namecheap";
pub(crate) const PRODUCTION_ENDPOINT: &str = "https://api.namecheap.com/xml.response";
pub(crate) const SANDBOX_ENDPOINT: &str = "https://api.sandbox.namecheap.com/xml.response";
/// Command namespace for host-record operations.
pub(crate) const COMMAND_PREFIX: &str = "namecheap.domains.dns.";

/// Namecheap host-record API client.
///
/// # Construction
///
/// ```rust,no_run
/// use std::time::Duration;
/// use namecheap_provider::{NamecheapCredentials, NamecheapProvider};
///
/// let provider = NamecheapProvider::builder(NamecheapCredentials {
///     username: "alice".to_string(),
///     api_key: "your-api-key".to_string(),
///     sandbox: true,
///     client_ip: "127.0.0.1".to_string(),
/// })
/// .timeout(Duration::from_secs(30))
/// .build()?;
/// # Ok::<(), namecheap_provider::ProviderError>(())
/// ```
pub struct NamecheapProvider {
    pub(crate) client: Client,
    pub(crate) credentials: NamecheapCredentials,
    pub(crate) endpoint: String,
}

/// Builder for [`NamecheapProvider`].
pub struct NamecheapProviderBuilder {
    credentials: NamecheapCredentials,
    timeout: Duration,
    endpoint: Option<String>,
}

impl NamecheapProviderBuilder {
    fn new(credentials: NamecheapCredentials) -> Self {
        Self {
            credentials,
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            endpoint: None,
        }
    }

    /// Timeout for the whole request/response cycle (default: 10s).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the API endpoint, e.g. to talk to a local mock registrar.
    ///
    /// When unset the sandbox flag of the credentials picks the host.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Build the [`NamecheapProvider`] instance.
    pub fn build(self) -> Result<NamecheapProvider> {
        let endpoint = self.endpoint.unwrap_or_else(|| {
            if self.credentials.sandbox {
                SANDBOX_ENDPOINT.to_string()
            } else {
                PRODUCTION_ENDPOINT.to_string()
            }
        });
        Ok(NamecheapProvider {
            client: create_http_client(self.timeout, PROVIDER_NAME)?,
            credentials: self.credentials,
            endpoint,
        })
    }
}

impl NamecheapProvider {
    /// Creates a provider with the default timeout.
    pub fn new(credentials: NamecheapCredentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(credentials: NamecheapCredentials) -> NamecheapProviderBuilder {
        NamecheapProviderBuilder::new(credentials)
    }

    /// The API endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
