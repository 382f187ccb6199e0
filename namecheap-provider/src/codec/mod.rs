//! Format codecs
//!
//! Bidirectional conversion between [`ApiResponse`] and its three file/wire
//! representations. Every format exposes the same field identifiers, so a
//! document decoded from one format and encoded into another decodes back to
//! the identical record set.

mod json;
mod markup;
mod yaml;

use std::fmt;
use std::str::FromStr;

use crate::error::{ProviderError, Result};
use crate::types::ApiResponse;

/// Serialization format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Attribute-centric XML, the registrar's native response format.
    Xml,
    /// Indentation-based YAML.
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

impl Format {
    /// Every supported format, in the order they are listed to users.
    pub const ALL: [Self; 3] = [Self::Xml, Self::Yaml, Self::Json];

    /// The selector string for this format.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }

    /// Comma separated list of selectors, for help and error texts.
    pub fn supported() -> String {
        Self::ALL
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProviderError::InvalidParameter {
                param: "format".to_string(),
                detail: format!(
                    "'{s}' is not supported. Please use one of: {}",
                    Self::supported()
                ),
            })
    }
}

/// Decode a record set from `input` in the given format.
pub fn decode(format: Format, input: &[u8]) -> Result<ApiResponse> {
    let decoded = match format {
        Format::Xml => markup::decode(input),
        Format::Yaml => yaml::decode(input),
        Format::Json => json::decode(input),
    };
    decoded.map_err(|detail| {
        log::error!("[codec] Failed to decode {format}: {detail}");
        ProviderError::ParseError {
            format: format.to_string(),
            detail,
        }
    })
}

/// Encode a record set into the given format.
pub fn encode(format: Format, response: &ApiResponse) -> Result<Vec<u8>> {
    let encoded = match format {
        Format::Xml => markup::encode(response),
        Format::Yaml => yaml::encode(response),
        Format::Json => json::encode(response),
    };
    encoded.map_err(|detail| ProviderError::SerializationError {
        format: format.to_string(),
        detail,
    })
}

/// Re-encode `input` from one format into another.
///
/// Identical formats are rejected: a conversion is never a byte passthrough.
pub fn convert(from: Format, to: Format, input: &[u8]) -> Result<Vec<u8>> {
    ensure_distinct(from, to)?;
    encode(to, &decode(from, input)?)
}

/// Reject a conversion whose input and output formats are the same.
pub fn ensure_distinct(from: Format, to: Format) -> Result<()> {
    if from == to {
        return Err(ProviderError::InvalidParameter {
            param: "output-format".to_string(),
            detail: "Input format is the same as output format, they must be different"
                .to_string(),
        });
    }
    Ok(())
}
