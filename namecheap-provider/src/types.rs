use serde::{Deserialize, Serialize};

/// Status value the registrar reports for a successful command.
pub const STATUS_OK: &str = "OK";

/// Host-id the registrar interprets as "new record, assign an id".
pub const NEW_HOST_ID: &str = "1";

// ============ Record Model ============

/// One registrar API call's result.
///
/// Field identifiers are shared by every serialization format so that a
/// document written in one format can be hand-edited and read back in another.
/// Missing members decode as empty strings; every member is always emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiResponse {
    /// `OK` on success, anything else means the payload must not be trusted.
    #[serde(rename = "Status")]
    pub status: String,
    /// XML namespace of the registrar response.
    #[serde(rename = "xmlns")]
    pub xmlns: String,
    #[serde(rename = "Errors")]
    pub errors: ErrorList,
    #[serde(rename = "Warnings")]
    pub warnings: WarningList,
    #[serde(rename = "RequestedCommand")]
    pub requested_command: String,
    #[serde(rename = "CommandResponse")]
    pub command_response: CommandResponse,
    #[serde(rename = "Server")]
    pub server: String,
    #[serde(rename = "GMTTimeDifference")]
    pub gmt_time_difference: String,
    #[serde(rename = "ExecutionTime")]
    pub execution_time: String,
}

impl ApiResponse {
    /// Whether the registrar reported success.
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// The host records carried by the command payload.
    pub fn hosts(&self) -> &[Host] {
        &self.command_response.hosts_result.hosts
    }

    /// Mutable access to the host-record set.
    pub fn hosts_mut(&mut self) -> &mut DomainHostsResult {
        &mut self.command_response.hosts_result
    }
}

/// Error entries of an [`ApiResponse`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorList {
    #[serde(rename = "Error")]
    pub entries: Vec<ApiMessage>,
}

/// Warning entries of an [`ApiResponse`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarningList {
    #[serde(rename = "Warning")]
    pub entries: Vec<ApiMessage>,
}

/// A numbered error or warning reported by the registrar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiMessage {
    #[serde(rename = "Number")]
    pub number: String,
    #[serde(rename = "Text")]
    pub text: String,
}

impl ApiMessage {
    pub fn new(number: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            text: text.into(),
        }
    }
}

/// Command-specific payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandResponse {
    /// Fully qualified command name, e.g. `namecheap.domains.dns.getHosts`.
    #[serde(rename = "Type")]
    pub response_type: String,
    #[serde(rename = "DomainDNSGetHostsResult")]
    pub hosts_result: DomainHostsResult,
}

/// The host-record set of one domain.
///
/// Order matters: the upload keys each write group by the record's host-id in
/// sequence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainHostsResult {
    /// `<second-level>.<top-level>`, e.g. `example.com`.
    #[serde(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "EmailType")]
    pub email_type: String,
    #[serde(rename = "IsUsingOurDNS")]
    pub is_using_our_dns: String,
    #[serde(rename = "host")]
    pub hosts: Vec<Host>,
}

impl DomainHostsResult {
    /// Split [`domain`](Self::domain) into `(sld, tld)` on the first dot.
    ///
    /// Returns `None` when the domain is unset or either part is empty.
    pub fn domain_parts(&self) -> Option<(&str, &str)> {
        let (sld, tld) = self.domain.split_once('.')?;
        if sld.is_empty() || tld.is_empty() {
            return None;
        }
        Some((sld, tld))
    }

    /// Set the domain from its two parts.
    pub fn set_domain(&mut self, sld: &str, tld: &str) {
        self.domain = format!("{sld}.{tld}");
    }
}

/// One DNS resource record.
///
/// Every attribute is kept as the registrar sent it. TTL and MX preference
/// are not parsed so that values round-trip byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Host {
    #[serde(rename = "HostId")]
    pub host_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    /// A, AAAA, CNAME, MX, TXT, ...
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "MXPref")]
    pub mx_pref: String,
    /// Seconds. `1799` is the registrar's "Automatic".
    #[serde(rename = "TTL")]
    pub ttl: String,
    /// Read-only.
    #[serde(rename = "AssociatedAppTitle")]
    pub associated_app_title: String,
    #[serde(rename = "FriendlyName")]
    pub friendly_name: String,
    #[serde(rename = "IsActive")]
    pub is_active: String,
    /// Read-only.
    #[serde(rename = "IsDDNSEnabled")]
    pub is_ddns_enabled: String,
}

impl Host {
    /// Whether every attribute is empty, i.e. the record was soft-deleted.
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Whether this record has the given `(name, type)` key.
    pub fn matches(&self, name: &str, record_type: &str) -> bool {
        self.name == name && self.record_type == record_type
    }
}

// ============ Request Parameters ============

/// Credentials and caller identity sent with every registrar request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamecheapCredentials {
    /// API user; also sent as the acting username.
    pub username: String,
    pub api_key: String,
    /// Use `api.sandbox.namecheap.com` instead of the production host.
    pub sandbox: bool,
    /// Whitelisted client IP. The registrar does not really check it.
    pub client_ip: String,
}

/// The domain a request applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParams {
    /// Second-level domain, e.g. `example`.
    pub sld: String,
    /// Top-level domain, e.g. `com`.
    pub tld: String,
}

impl DomainParams {
    pub fn new(sld: impl Into<String>, tld: impl Into<String>) -> Self {
        Self {
            sld: sld.into(),
            tld: tld.into(),
        }
    }
}

impl std::fmt::Display for DomainParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.sld, self.tld)
    }
}
