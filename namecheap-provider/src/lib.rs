//! # namecheap-provider
//!
//! Model, format codecs, reconciler and API client for Namecheap DNS host
//! records.
//!
//! ## Components
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`ApiResponse`] and friends | Canonical in-memory host-record set |
//! | [`codec`] | XML / YAML / JSON conversion with identical field names |
//! | [`reconcile`] | Merge one edited record into a full set |
//! | [`NamecheapProvider`] | `getHosts` / `setHosts` over HTTPS |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use namecheap_provider::{
//!     DomainParams, Host, HostsProvider, NamecheapCredentials, NamecheapProvider, reconcile,
//! };
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = NamecheapProvider::new(NamecheapCredentials {
//!         username: "alice".to_string(),
//!         api_key: "your-api-key".to_string(),
//!         sandbox: false,
//!         client_ip: "127.0.0.1".to_string(),
//!     })?;
//!     let domain = DomainParams::new("example", "com");
//!
//!     // 1. Download the current record set
//!     let mut response = provider.fetch(&domain).await?;
//!
//!     // 2. Point www at a new address, keeping its other settings
//!     let incoming = Host {
//!         name: "www".to_string(),
//!         record_type: "A".to_string(),
//!         address: "192.0.2.10".to_string(),
//!         is_active: "true".to_string(),
//!         ..Default::default()
//!     };
//!     reconcile(response.hosts_mut(), incoming, false);
//!
//!     // 3. Upload the whole set back
//!     provider.push(&domain, &response).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). Every
//! error is fatal: nothing is retried.
//!
//! - [`ProviderError::InvalidParameter`]: unusable option or format selection
//! - [`ProviderError::ParseError`] / [`ProviderError::SerializationError`]: codec failures
//! - [`ProviderError::NetworkError`] / [`ProviderError::Timeout`]: transport failures
//! - [`ProviderError::ApiError`]: the registrar answered with a non-`OK` status

pub mod codec;
mod error;
mod http_client;
mod providers;
mod reconcile;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

pub use codec::Format;

pub use reconcile::{ReconcileOutcome, reconcile};

pub use traits::{HostsProvider, check_status};

pub use types::{
    ApiMessage, ApiResponse, CommandResponse, DomainHostsResult, DomainParams, ErrorList, Host,
    NEW_HOST_ID, NamecheapCredentials, STATUS_OK, WarningList,
};

pub use http_client::DEFAULT_REQUEST_TIMEOUT_SECS;

pub use providers::{NamecheapProvider, NamecheapProviderBuilder, build_set_hosts_body};
