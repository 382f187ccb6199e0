//! `set`: upload a locally stored record set.

use namecheap_provider::{HostsProvider, codec};

use crate::config::SetSettings;
use crate::error::CliResult;
use crate::io::read_input;

pub async fn run(provider: &dyn HostsProvider, settings: &SetSettings) -> CliResult<()> {
    let input = read_input(settings.input.file.as_deref())?;
    let records = codec::decode(settings.input.format, &input)?;
    let domain = settings.resolve_domain(&records.command_response.hosts_result)?;

    tracing::debug!("Uploading {} host records to {domain}", records.hosts().len());
    provider.push(&domain, &records).await?;
    Ok(())
}
