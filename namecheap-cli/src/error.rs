//! CLI error type

use std::path::PathBuf;

use namecheap_provider::ProviderError;
use thiserror::Error;

/// Everything that can stop a command.
#[derive(Error, Debug)]
pub enum CliError {
    /// Missing or inconsistent options
    #[error("{0}")]
    Configuration(String),

    /// Input or output file could not be used
    #[error("{message} '{}': {source}", .path.display())]
    File {
        path: PathBuf,
        message: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Output target already exists and `--force` was not given
    #[error("'{}' exists, but without the --force flag, will not overwrite it", .0.display())]
    OutputExists(PathBuf),

    /// Reading stdin or writing stdout failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the provider library
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl CliError {
    /// Whether the failure was caused by user input rather than the
    /// environment; used to pick the log level.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Configuration(_) | Self::OutputExists(_) => true,
            Self::Provider(e) => e.is_expected(),
            Self::File { .. } | Self::Io(_) => false,
        }
    }

    pub(crate) fn file(
        path: impl Into<PathBuf>,
        message: &'static str,
        source: std::io::Error,
    ) -> Self {
        Self::File {
            path: path.into(),
            message,
            source,
        }
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;
