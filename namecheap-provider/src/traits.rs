use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{ApiResponse, DomainParams};

/// Registrar host-record API.
///
/// Both operations are all-or-nothing: a response whose status is not `OK`
/// is an error, never a partial success.
#[async_trait]
pub trait HostsProvider: Send + Sync {
    /// Provider identifier, used as log and error prefix.
    fn id(&self) -> &'static str;

    /// Download the full host-record set of a domain.
    async fn fetch(&self, domain: &DomainParams) -> Result<ApiResponse>;

    /// Replace the host-record set of a domain with `hosts`.
    ///
    /// Returns the registrar's acknowledgement.
    async fn push(&self, domain: &DomainParams, hosts: &ApiResponse) -> Result<ApiResponse>;
}

/// Fail unless the registrar reported success.
///
/// Every error entry is collected into one message as `Number: Text`, one per
/// line.
pub fn check_status(provider: &str, response: &ApiResponse) -> Result<()> {
    if response.is_ok() {
        return Ok(());
    }

    let raw_message = response
        .errors
        .entries
        .iter()
        .map(|e| format!("{}: {}", e.number, e.text))
        .collect::<Vec<_>>()
        .join("\n");
    log::error!("[{provider}] API error (status '{}'): {raw_message}", response.status);

    Err(ProviderError::ApiError {
        provider: provider.to_string(),
        status: response.status.clone(),
        raw_message,
    })
}
