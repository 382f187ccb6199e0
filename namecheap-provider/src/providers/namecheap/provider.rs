//! Namecheap HostsProvider trait implementation

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::HostsProvider;
use crate::types::{ApiResponse, DomainParams};

use super::http::{Command, build_set_hosts_body};
use super::{NamecheapProvider, PROVIDER_NAME};

#[async_trait]
impl HostsProvider for NamecheapProvider {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn fetch(&self, domain: &DomainParams) -> Result<ApiResponse> {
        log::info!("[{PROVIDER_NAME}] Downloading DNS configuration of {domain}");
        let response = self.request(domain, Command::GetHosts, None).await?;
        log::info!(
            "[{PROVIDER_NAME}] Success. {} host records, execution time: {}",
            response.hosts().len(),
            response.execution_time
        );
        Ok(response)
    }

    async fn push(&self, domain: &DomainParams, hosts: &ApiResponse) -> Result<ApiResponse> {
        log::info!("[{PROVIDER_NAME}] Uploading DNS configuration of {domain}");
        let body = build_set_hosts_body(hosts.hosts());
        let response = self.request(domain, Command::SetHosts, Some(body)).await?;
        log::info!(
            "[{PROVIDER_NAME}] Success. Execution time: {}",
            response.execution_time
        );
        Ok(response)
    }
}
