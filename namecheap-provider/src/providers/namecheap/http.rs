//! Namecheap HTTP request methods

use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};

use crate::codec::{self, Format};
use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::check_status;
use crate::types::{ApiResponse, DomainParams, Host};
use crate::utils::log_sanitizer::mask_query_param;

use super::{COMMAND_PREFIX, NamecheapProvider, PROVIDER_NAME};

/// Registrar command to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    GetHosts,
    SetHosts,
}

impl Command {
    fn name(self) -> &'static str {
        match self {
            Self::GetHosts => "getHosts",
            Self::SetHosts => "setHosts",
        }
    }
}

impl NamecheapProvider {
    /// Build the request URL: credentials, domain parts, client IP and the
    /// command all travel as query parameters.
    pub(crate) fn command_url(&self, domain: &DomainParams, command: Command) -> String {
        let creds = &self.credentials;
        format!(
            "{}?apiuser={}&apikey={}&username={}&SLD={}&TLD={}&ClientIP={}&Command={COMMAND_PREFIX}{}",
            self.endpoint,
            urlencoding::encode(&creds.username),
            urlencoding::encode(&creds.api_key),
            urlencoding::encode(&creds.username),
            urlencoding::encode(&domain.sld),
            urlencoding::encode(&domain.tld),
            urlencoding::encode(&creds.client_ip),
            command.name(),
        )
    }

    /// Execute one registrar command and return its status-checked response.
    pub(crate) async fn request(
        &self,
        domain: &DomainParams,
        command: Command,
        body: Option<String>,
    ) -> Result<ApiResponse> {
        let url = self.command_url(domain, command);
        let log_url = mask_query_param(&url, "apikey");

        let (method, request) = match body {
            None => (
                "GET",
                self.client.get(&url).header(CACHE_CONTROL, "no-cache"),
            ),
            Some(body) => (
                "POST",
                self.client
                    .post(&url)
                    .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(body),
            ),
        };

        let (status, response_text) =
            HttpUtils::execute_request(request, PROVIDER_NAME, method, &log_url).await?;

        let response = codec::decode(Format::Xml, response_text.as_bytes()).map_err(|e| {
            // Non-XML bodies usually come with an HTTP error status
            if status >= 400 {
                ProviderError::NetworkError {
                    provider: PROVIDER_NAME.to_string(),
                    detail: format!("HTTP {status}: {response_text}"),
                }
            } else {
                e
            }
        })?;

        check_status(PROVIDER_NAME, &response)?;

        for warning in &response.warnings.entries {
            log::warn!("[{PROVIDER_NAME}] Warning {}: {}", warning.number, warning.text);
        }

        Ok(response)
    }
}

/// Flatten a host-record set into the `setHosts` form body.
///
/// Each host with a non-empty host-id contributes one group of
/// `HostName{id}`, `RecordType{id}`, `Address{id}`, `MXPref{id}`, `TTL{id}`,
/// `FriendlyName{id}` and `IsActive{id}` pairs, in sequence order. Hosts
/// without a host-id (blanked or never assigned) are omitted.
pub fn build_set_hosts_body(hosts: &[Host]) -> String {
    hosts
        .iter()
        .filter(|h| !h.host_id.is_empty())
        .flat_map(|host| {
            let id = urlencoding::encode(&host.host_id);
            [
                ("HostName", &host.name),
                ("RecordType", &host.record_type),
                ("Address", &host.address),
                ("MXPref", &host.mx_pref),
                ("TTL", &host.ttl),
                ("FriendlyName", &host.friendly_name),
                ("IsActive", &host.is_active),
            ]
            .map(|(key, value)| format!("{key}{id}={}", urlencoding::encode(value)))
        })
        .collect::<Vec<_>>()
        .join("&")
}
