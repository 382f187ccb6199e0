//! Generic HTTP client tools
//!
//! One request per call, no retries: a network failure or an elapsed timeout
//! is reported straight back to the caller.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};

use crate::error::{ProviderError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// Default timeout for the whole request/response cycle (seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Create an HTTP client whose timeout covers the full request/response cycle.
pub fn create_http_client(timeout: Duration, provider_name: &str) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ProviderError::NetworkError {
            provider: provider_name.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and waits for the complete response body.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `provider_name` - Provider name (for logging)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `url_or_action` - sanitized URL or command name (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))`
    /// * `Err(ProviderError::Timeout)` - the configured timeout elapsed
    /// * `Err(ProviderError::NetworkError)` - any other transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url_or_action: &str,
    ) -> Result<(u16, String)> {
        log::debug!("[{provider_name}] {method_name} {url_or_action}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| transport_error(&e, provider_name))?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        // Read response body
        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                transport_error(&e, provider_name)
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }
}

fn transport_error(e: &reqwest::Error, provider_name: &str) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout {
            provider: provider_name.to_string(),
            detail: e.to_string(),
        }
    } else {
        ProviderError::NetworkError {
            provider: provider_name.to_string(),
            detail: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_with_timeout() {
        let client = create_http_client(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS), "test");
        assert!(client.is_ok(), "unexpected result: {client:?}");
    }

    #[tokio::test]
    async fn connection_refused_is_network_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = create_http_client(Duration::from_secs(2), "test").unwrap();
        let result = HttpUtils::execute_request(
            client.get(format!("http://{addr}/")),
            "test",
            "GET",
            "/",
        )
        .await;
        assert!(
            matches!(&result, Err(ProviderError::NetworkError { .. })),
            "unexpected result: {result:?}"
        );
    }
}
