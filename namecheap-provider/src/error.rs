use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for every model, codec and registrar operation.
///
/// Every variant is fatal to the invocation that produced it: nothing in this
/// crate retries or recovers locally.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// An option or parameter is missing or has an unusable value.
    #[error("Invalid parameter '{param}': {detail}")]
    InvalidParameter {
        /// Name of the offending option.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The payload could not be decoded from the given format.
    #[error("Failed to decode {format}: {detail}")]
    ParseError {
        /// Format selector (`xml`, `yaml`, `json`).
        format: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The in-memory record set could not be encoded into the given format.
    #[error("Failed to encode {format}: {detail}")]
    SerializationError {
        /// Format selector (`xml`, `yaml`, `json`).
        format: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("[{provider}] Network error: {detail}")]
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The request/response cycle exceeded the configured timeout.
    #[error("[{provider}] Request timeout: {detail}")]
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The registrar answered with a status other than `OK`.
    ///
    /// `raw_message` holds every reported `Number: Text` pair, one per line.
    #[error("[{provider}] Received errors from the API server:\n{raw_message}")]
    ApiError {
        /// Provider that produced the error.
        provider: String,
        /// Status reported by the registrar.
        status: String,
        /// Concatenated error list.
        raw_message: String,
    },
}

impl ProviderError {
    /// Whether the error stems from user input rather than the remote side.
    ///
    /// Used to pick between `warn` and `error` when reporting.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::ParseError { .. }
        )
    }
}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
