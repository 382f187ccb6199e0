//! `get`: download the record set and write it in the chosen format.

use namecheap_provider::{HostsProvider, codec};

use crate::config::GetSettings;
use crate::error::CliResult;
use crate::io::{ensure_writable, write_output};

pub async fn run(provider: &dyn HostsProvider, settings: &GetSettings) -> CliResult<()> {
    let output = &settings.output;
    if let Some(path) = &output.file {
        ensure_writable(path, output.force)?;
    }

    let response = provider.fetch(&settings.domain).await?;
    let encoded = codec::encode(output.format, &response)?;
    write_output(output.file.as_deref(), output.force, &encoded)
}
