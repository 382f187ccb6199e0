//! `convert`: re-encode a local record set into another format.

use namecheap_provider::codec;

use crate::config::ConvertSettings;
use crate::error::CliResult;
use crate::io::{read_input, write_output};

pub fn run(settings: &ConvertSettings) -> CliResult<()> {
    let input = read_input(settings.input.file.as_deref())?;
    let mut records = codec::decode(settings.input.format, &input)?;
    if let Some(domain) = &settings.domain {
        records.hosts_mut().set_domain(&domain.sld, &domain.tld);
    }

    let encoded = codec::encode(settings.output.format, &records)?;
    tracing::debug!(
        "Converted {} host records from {} to {}",
        records.hosts().len(),
        settings.input.format,
        settings.output.format
    );
    write_output(settings.output.file.as_deref(), settings.output.force, &encoded)
}
