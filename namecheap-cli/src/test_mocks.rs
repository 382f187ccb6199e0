//! In-memory provider used by command tests.

use std::sync::Mutex;

use async_trait::async_trait;
use namecheap_provider::{
    ApiMessage, ApiResponse, DomainParams, Host, HostsProvider, ProviderError, Result, STATUS_OK,
};

/// Serves a fixed record set and remembers every upload.
pub struct FakeProvider {
    current: ApiResponse,
    fail_with: Option<ProviderError>,
    pushes: Mutex<Vec<(DomainParams, ApiResponse)>>,
}

impl FakeProvider {
    pub fn new(hosts: Vec<Host>) -> Self {
        let mut current = ApiResponse {
            status: STATUS_OK.to_string(),
            execution_time: "0.01".to_string(),
            ..Default::default()
        };
        current.hosts_mut().domain = "example.com".to_string();
        current.hosts_mut().hosts = hosts;
        Self {
            current,
            fail_with: None,
            pushes: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with an API error.
    pub fn failing() -> Self {
        Self {
            fail_with: Some(ProviderError::ApiError {
                provider: "fake".to_string(),
                status: "ERROR".to_string(),
                raw_message: "1011102: API Key is invalid".to_string(),
            }),
            ..Self::new(Vec::new())
        }
    }

    pub fn current_hosts(&self) -> Vec<Host> {
        self.current.hosts().to_vec()
    }

    pub fn pushes(&self) -> Vec<(DomainParams, ApiResponse)> {
        self.pushes.lock().unwrap().clone()
    }
}

pub fn host(id: &str, name: &str, record_type: &str, address: &str) -> Host {
    Host {
        host_id: id.to_string(),
        name: name.to_string(),
        record_type: record_type.to_string(),
        address: address.to_string(),
        mx_pref: "10".to_string(),
        ttl: "1799".to_string(),
        is_active: "true".to_string(),
        is_ddns_enabled: "false".to_string(),
        ..Default::default()
    }
}

#[async_trait]
impl HostsProvider for FakeProvider {
    fn id(&self) -> &'static str {
        "fake"
    }

    async fn fetch(&self, _domain: &DomainParams) -> Result<ApiResponse> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        Ok(self.current.clone())
    }

    async fn push(&self, domain: &DomainParams, hosts: &ApiResponse) -> Result<ApiResponse> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.pushes
            .lock()
            .unwrap()
            .push((domain.clone(), hosts.clone()));
        let mut ack = ApiResponse {
            status: STATUS_OK.to_string(),
            ..Default::default()
        };
        ack.warnings.entries.push(ApiMessage::new("1", "accepted"));
        Ok(ack)
    }
}
