//! XML codec
//!
//! The registrar speaks attribute-centric XML. Encoding goes through private
//! serde wire types (quick-xml marks attributes with an `@` prefix and element
//! text with `$text`). Decoding walks the reader events directly so element
//! text is kept byte for byte and documents with any other root are refused.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use quick_xml::se::Serializer;
use serde::Serialize;

use crate::types::{ApiMessage, ApiResponse, Host};

const ROOT_ELEMENT: &str = "ApiResponse";
const INDENT: usize = 2;

#[derive(Debug, Serialize)]
struct XmlApiResponse {
    #[serde(rename = "@Status")]
    status: String,
    #[serde(rename = "@xmlns")]
    xmlns: String,
    #[serde(rename = "Errors")]
    errors: XmlErrors,
    #[serde(rename = "Warnings")]
    warnings: XmlWarnings,
    #[serde(rename = "RequestedCommand")]
    requested_command: String,
    #[serde(rename = "CommandResponse")]
    command_response: XmlCommandResponse,
    #[serde(rename = "Server")]
    server: String,
    #[serde(rename = "GMTTimeDifference")]
    gmt_time_difference: String,
    #[serde(rename = "ExecutionTime")]
    execution_time: String,
}

#[derive(Debug, Serialize)]
struct XmlErrors {
    #[serde(rename = "Error")]
    entries: Vec<XmlMessage>,
}

#[derive(Debug, Serialize)]
struct XmlWarnings {
    #[serde(rename = "Warning")]
    entries: Vec<XmlMessage>,
}

#[derive(Debug, Serialize)]
struct XmlMessage {
    #[serde(rename = "@Number")]
    number: String,
    #[serde(rename = "$text")]
    text: String,
}

#[derive(Debug, Serialize)]
struct XmlCommandResponse {
    #[serde(rename = "@Type")]
    response_type: String,
    #[serde(rename = "DomainDNSGetHostsResult")]
    hosts_result: XmlHostsResult,
}

#[derive(Debug, Serialize)]
struct XmlHostsResult {
    #[serde(rename = "@Domain")]
    domain: String,
    #[serde(rename = "@EmailType")]
    email_type: String,
    #[serde(rename = "@IsUsingOurDNS")]
    is_using_our_dns: String,
    #[serde(rename = "host")]
    hosts: Vec<XmlHost>,
}

#[derive(Debug, Serialize)]
struct XmlHost {
    #[serde(rename = "@HostId")]
    host_id: String,
    #[serde(rename = "@Name")]
    name: String,
    #[serde(rename = "@Type")]
    record_type: String,
    #[serde(rename = "@Address")]
    address: String,
    #[serde(rename = "@MXPref")]
    mx_pref: String,
    #[serde(rename = "@TTL")]
    ttl: String,
    #[serde(rename = "@AssociatedAppTitle")]
    associated_app_title: String,
    #[serde(rename = "@FriendlyName")]
    friendly_name: String,
    #[serde(rename = "@IsActive")]
    is_active: String,
    #[serde(rename = "@IsDDNSEnabled")]
    is_ddns_enabled: String,
}

// ============ Model -> Wire ============

impl From<&ApiMessage> for XmlMessage {
    fn from(m: &ApiMessage) -> Self {
        Self {
            number: m.number.clone(),
            text: m.text.clone(),
        }
    }
}

impl From<&Host> for XmlHost {
    fn from(h: &Host) -> Self {
        Self {
            host_id: h.host_id.clone(),
            name: h.name.clone(),
            record_type: h.record_type.clone(),
            address: h.address.clone(),
            mx_pref: h.mx_pref.clone(),
            ttl: h.ttl.clone(),
            associated_app_title: h.associated_app_title.clone(),
            friendly_name: h.friendly_name.clone(),
            is_active: h.is_active.clone(),
            is_ddns_enabled: h.is_ddns_enabled.clone(),
        }
    }
}

impl From<&ApiResponse> for XmlApiResponse {
    fn from(r: &ApiResponse) -> Self {
        let result = &r.command_response.hosts_result;
        Self {
            status: r.status.clone(),
            xmlns: r.xmlns.clone(),
            errors: XmlErrors {
                entries: r.errors.entries.iter().map(Into::into).collect(),
            },
            warnings: XmlWarnings {
                entries: r.warnings.entries.iter().map(Into::into).collect(),
            },
            requested_command: r.requested_command.clone(),
            command_response: XmlCommandResponse {
                response_type: r.command_response.response_type.clone(),
                hosts_result: XmlHostsResult {
                    domain: result.domain.clone(),
                    email_type: result.email_type.clone(),
                    is_using_our_dns: result.is_using_our_dns.clone(),
                    hosts: result.hosts.iter().map(Into::into).collect(),
                },
            },
            server: r.server.clone(),
            gmt_time_difference: r.gmt_time_difference.clone(),
            execution_time: r.execution_time.clone(),
        }
    }
}

// ============ Codec ============

pub(super) fn decode(input: &[u8]) -> Result<ApiResponse, String> {
    let text = std::str::from_utf8(input).map_err(|e| e.to_string())?;
    let mut reader = Reader::from_str(text);
    let mut response = ApiResponse::default();
    // Open elements below the document, outermost first.
    let mut path: Vec<String> = Vec::new();
    let mut content = String::new();

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(element) => {
                let name = local_name(&element)?;
                open_element(&mut response, &path, &name, &element)?;
                path.push(name);
                content.clear();
            }
            Event::Empty(element) => {
                let name = local_name(&element)?;
                open_element(&mut response, &path, &name, &element)?;
                if path.is_empty() {
                    return Ok(response);
                }
            }
            Event::Text(text) => content.push_str(&text.unescape().map_err(|e| e.to_string())?),
            Event::CData(data) => {
                content.push_str(std::str::from_utf8(&data).map_err(|e| e.to_string())?);
            }
            Event::End(_) => {
                let Some(name) = path.pop() else {
                    return Err("unexpected closing tag".to_string());
                };
                close_element(&mut response, &path, &name, std::mem::take(&mut content));
                if path.is_empty() {
                    return Ok(response);
                }
            }
            Event::Eof => {
                return Err(match path.first() {
                    Some(_) => "unexpected end of document".to_string(),
                    None => format!("missing <{ROOT_ELEMENT}> root element"),
                });
            }
            _ => {}
        }
    }
}

fn local_name(element: &BytesStart) -> Result<String, String> {
    std::str::from_utf8(element.local_name().as_ref())
        .map(str::to_string)
        .map_err(|e| e.to_string())
}

fn for_each_attribute(
    element: &BytesStart,
    mut apply: impl FnMut(&str, String),
) -> Result<(), String> {
    for attribute in element.attributes() {
        let attribute = attribute.map_err(|e| e.to_string())?;
        let key = std::str::from_utf8(attribute.key.local_name().as_ref())
            .map_err(|e| e.to_string())?
            .to_string();
        let value = attribute.unescape_value().map_err(|e| e.to_string())?;
        apply(&key, value.into_owned());
    }
    Ok(())
}

fn message(element: &BytesStart) -> Result<ApiMessage, String> {
    let mut message = ApiMessage::default();
    for_each_attribute(element, |key, value| {
        if key == "Number" {
            message.number = value;
        }
    })?;
    Ok(message)
}

fn host(element: &BytesStart) -> Result<Host, String> {
    let mut host = Host::default();
    for_each_attribute(element, |key, value| {
        let field = match key {
            "HostId" => &mut host.host_id,
            "Name" => &mut host.name,
            "Type" => &mut host.record_type,
            "Address" => &mut host.address,
            "MXPref" => &mut host.mx_pref,
            "TTL" => &mut host.ttl,
            "AssociatedAppTitle" => &mut host.associated_app_title,
            "FriendlyName" => &mut host.friendly_name,
            "IsActive" => &mut host.is_active,
            "IsDDNSEnabled" => &mut host.is_ddns_enabled,
            _ => return,
        };
        *field = value;
    })?;
    Ok(host)
}

/// Apply the attributes of an element opened below `path`.
fn open_element(
    response: &mut ApiResponse,
    path: &[String],
    name: &str,
    element: &BytesStart,
) -> Result<(), String> {
    let parents: Vec<&str> = path.iter().map(String::as_str).collect();
    match (parents.as_slice(), name) {
        ([], ROOT_ELEMENT) => for_each_attribute(element, |key, value| match key {
            "Status" => response.status = value,
            "xmlns" => response.xmlns = value,
            _ => {}
        }),
        ([], other) => Err(format!(
            "expected <{ROOT_ELEMENT}> root element, found <{other}>"
        )),
        ([ROOT_ELEMENT, "Errors"], "Error") => {
            response.errors.entries.push(message(element)?);
            Ok(())
        }
        ([ROOT_ELEMENT, "Warnings"], "Warning") => {
            response.warnings.entries.push(message(element)?);
            Ok(())
        }
        ([ROOT_ELEMENT], "CommandResponse") => for_each_attribute(element, |key, value| {
            if key == "Type" {
                response.command_response.response_type = value;
            }
        }),
        ([ROOT_ELEMENT, "CommandResponse"], "DomainDNSGetHostsResult") => {
            let result = &mut response.command_response.hosts_result;
            for_each_attribute(element, |key, value| match key {
                "Domain" => result.domain = value,
                "EmailType" => result.email_type = value,
                "IsUsingOurDNS" => result.is_using_our_dns = value,
                _ => {}
            })
        }
        ([ROOT_ELEMENT, "CommandResponse", "DomainDNSGetHostsResult"], "host") => {
            response.command_response.hosts_result.hosts.push(host(element)?);
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Store the text content of an element closed below `path`.
fn close_element(response: &mut ApiResponse, path: &[String], name: &str, content: String) {
    let parents: Vec<&str> = path.iter().map(String::as_str).collect();
    let target = match (parents.as_slice(), name) {
        ([ROOT_ELEMENT], "RequestedCommand") => &mut response.requested_command,
        ([ROOT_ELEMENT], "Server") => &mut response.server,
        ([ROOT_ELEMENT], "GMTTimeDifference") => &mut response.gmt_time_difference,
        ([ROOT_ELEMENT], "ExecutionTime") => &mut response.execution_time,
        ([ROOT_ELEMENT, "Errors"], "Error") => match response.errors.entries.last_mut() {
            Some(entry) => &mut entry.text,
            None => return,
        },
        ([ROOT_ELEMENT, "Warnings"], "Warning") => match response.warnings.entries.last_mut() {
            Some(entry) => &mut entry.text,
            None => return,
        },
        _ => return,
    };
    *target = content;
}

pub(super) fn encode(response: &ApiResponse) -> Result<Vec<u8>, String> {
    let wire = XmlApiResponse::from(response);
    let mut buffer = String::new();
    let mut serializer =
        Serializer::with_root(&mut buffer, Some(ROOT_ELEMENT)).map_err(|e| e.to_string())?;
    serializer.indent(' ', INDENT);
    wire.serialize(serializer).map_err(|e| e.to_string())?;
    Ok(buffer.into_bytes())
}
