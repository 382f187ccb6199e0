//! `setone`: create, update or delete one record.
//!
//! Downloads the current record set, merges the single record given on the
//! command line, then uploads the entire set back.

use namecheap_provider::{HostsProvider, ReconcileOutcome, reconcile};

use crate::config::SetOneSettings;
use crate::error::CliResult;

pub async fn run(provider: &dyn HostsProvider, settings: &SetOneSettings) -> CliResult<()> {
    let mut records = provider.fetch(&settings.domain).await?;

    let record = &settings.record;
    let label = format!("{} record '{}'", record.record_type, record.name);
    match reconcile(records.hosts_mut(), record.clone(), settings.delete) {
        ReconcileOutcome::Updated(_) => tracing::info!("Updating {label}"),
        ReconcileOutcome::Inserted(_) => tracing::info!("Adding {label}"),
        ReconcileOutcome::Deleted(_) => tracing::info!("Deleting {label}"),
        ReconcileOutcome::Unchanged => tracing::warn!("No {label} to delete"),
    }

    provider.push(&settings.domain, &records).await?;
    Ok(())
}
