//! Subcommand implementations.
//!
//! Registrar-facing commands take a `&dyn HostsProvider` so they can run
//! against a stand-in provider.

mod convert;
mod get;
mod set;
mod setone;
mod version;

use namecheap_provider::{HostsProvider, NamecheapProvider};

use crate::config::{ApiSettings, Settings};
use crate::error::CliResult;

/// Execute one validated invocation.
pub async fn run(settings: Settings) -> CliResult<()> {
    match settings {
        Settings::Get(settings) => get::run(&connect(&settings.api)?, &settings).await,
        Settings::Set(settings) => set::run(&connect(&settings.api)?, &settings).await,
        Settings::SetOne(settings) => setone::run(&connect(&settings.api)?, &settings).await,
        Settings::Convert(settings) => convert::run(&settings),
        Settings::Version => {
            version::run();
            Ok(())
        }
    }
}

fn connect(api: &ApiSettings) -> CliResult<NamecheapProvider> {
    let provider = NamecheapProvider::builder(api.credentials.clone())
        .timeout(api.timeout)
        .build()?;
    tracing::debug!("[{}] Using endpoint {}", provider.id(), provider.endpoint());
    Ok(provider)
}
