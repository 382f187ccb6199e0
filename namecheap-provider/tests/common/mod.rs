//! Shared test tools: an in-process mock registrar and response fixtures.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tokio::net::TcpListener;

use namecheap_provider::{NamecheapCredentials, NamecheapProvider};

/// Assert that a `Result` is `Ok` and unwrap the value (fail the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

pub const API_KEY: &str = "test-api-key";
pub const BAD_API_KEY: &str = "bad-api-key";
/// Requests with this key get the error page of a failing gateway.
pub const GATEWAY_DOWN_KEY: &str = "gateway-down-key";

pub const BAD_GATEWAY_PAGE: &str = "<html>\r\n<head><title>502 Bad Gateway</title></head>\r\n<body>\r\n<center><h1>502 Bad Gateway</h1></center>\r\n</body>\r\n</html>\r\n";

pub const GET_HOSTS_RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ApiResponse Status="OK" xmlns="http://api.namecheap.com/xml.response">
  <Errors />
  <Warnings />
  <RequestedCommand>namecheap.domains.dns.gethosts</RequestedCommand>
  <CommandResponse Type="namecheap.domains.dns.getHosts">
    <DomainDNSGetHostsResult Domain="example.com" EmailType="FWD" IsUsingOurDNS="true">
      <host HostId="101" Name="@" Type="A" Address="192.0.2.1" MXPref="10" TTL="1799" AssociatedAppTitle="" FriendlyName="" IsActive="true" IsDDNSEnabled="false" />
      <host HostId="102" Name="www" Type="CNAME" Address="example.com." MXPref="10" TTL="1799" AssociatedAppTitle="" FriendlyName="" IsActive="true" IsDDNSEnabled="false" />
      <host HostId="103" Name="mail" Type="A" Address="192.0.2.25" MXPref="10" TTL="600" AssociatedAppTitle="" FriendlyName="mx" IsActive="true" IsDDNSEnabled="false" />
    </DomainDNSGetHostsResult>
  </CommandResponse>
  <Server>MOCK01</Server>
  <GMTTimeDifference>--5:00</GMTTimeDifference>
  <ExecutionTime>0.042</ExecutionTime>
</ApiResponse>"#;

pub const SET_HOSTS_RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ApiResponse Status="OK" xmlns="http://api.namecheap.com/xml.response">
  <Errors />
  <Warnings>
    <Warning Number="5050">Host list replaced</Warning>
  </Warnings>
  <RequestedCommand>namecheap.domains.dns.sethosts</RequestedCommand>
  <CommandResponse Type="namecheap.domains.dns.setHosts">
    <DomainDNSSetHostsResult Domain="example.com" IsSuccess="true" />
  </CommandResponse>
  <Server>MOCK01</Server>
  <GMTTimeDifference>--5:00</GMTTimeDifference>
  <ExecutionTime>0.107</ExecutionTime>
</ApiResponse>"#;

pub const AUTH_ERROR_RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ApiResponse Status="ERROR" xmlns="http://api.namecheap.com/xml.response">
  <Errors>
    <Error Number="1011102">API Key is invalid or API access has not been enabled</Error>
    <Error Number="1011150">Invalid request IP</Error>
  </Errors>
  <Warnings />
  <RequestedCommand />
  <Server>MOCK01</Server>
  <GMTTimeDifference>--5:00</GMTTimeDifference>
  <ExecutionTime>0</ExecutionTime>
</ApiResponse>"#;

/// One request as seen by the mock registrar.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub query: String,
    pub content_type: Option<String>,
    pub cache_control: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    delay: Duration,
}

/// A mock registrar listening on a random local port.
pub struct MockRegistrar {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockRegistrar {
    /// Start a registrar that answers immediately.
    pub async fn start() -> Self {
        Self::start_with_delay(Duration::ZERO).await
    }

    /// Start a registrar that waits `delay` before answering.
    pub async fn start_with_delay(delay: Duration) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            requests: Arc::clone(&requests),
            delay,
        };
        let app = Router::new()
            .route("/xml.response", get(handle_get).post(handle_post))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, requests }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/xml.response", self.addr)
    }

    /// Provider pointed at this registrar.
    pub fn provider(&self, api_key: &str, timeout: Duration) -> NamecheapProvider {
        NamecheapProvider::builder(NamecheapCredentials {
            username: "alice".to_string(),
            api_key: api_key.to_string(),
            sandbox: true,
            client_ip: "127.0.0.1".to_string(),
        })
        .endpoint(self.endpoint())
        .timeout(timeout)
        .build()
        .unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn respond(query: &str) -> Response {
    if query.contains(&format!("apikey={GATEWAY_DOWN_KEY}")) {
        return (
            StatusCode::BAD_GATEWAY,
            [(header::CONTENT_TYPE, "text/html")],
            BAD_GATEWAY_PAGE,
        )
            .into_response();
    }
    let body = if query.contains(&format!("apikey={BAD_API_KEY}")) {
        AUTH_ERROR_RESPONSE
    } else if query.contains("Command=namecheap.domains.dns.setHosts") {
        SET_HOSTS_RESPONSE
    } else {
        GET_HOSTS_RESPONSE
    };
    ([(header::CONTENT_TYPE, "text/xml")], body).into_response()
}

async fn handle_get(
    State(state): State<MockState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    tokio::time::sleep(state.delay).await;
    let query = query.unwrap_or_default();
    state.requests.lock().unwrap().push(RecordedRequest {
        method: "GET",
        query: query.clone(),
        content_type: header_value(&headers, header::CONTENT_TYPE),
        cache_control: header_value(&headers, header::CACHE_CONTROL),
        body: String::new(),
    });
    respond(&query)
}

async fn handle_post(
    State(state): State<MockState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    tokio::time::sleep(state.delay).await;
    let query = query.unwrap_or_default();
    state.requests.lock().unwrap().push(RecordedRequest {
        method: "POST",
        query: query.clone(),
        content_type: header_value(&headers, header::CONTENT_TYPE),
        cache_control: header_value(&headers, header::CACHE_CONTROL),
        body: String::from_utf8_lossy(&body).into_owned(),
    });
    respond(&query)
}
