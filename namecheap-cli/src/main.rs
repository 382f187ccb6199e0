//! Namecheap DNS command line interface.
//!
//! Downloads, uploads and edits the host records of a Namecheap domain, and
//! converts stored record sets between XML, YAML and JSON.
//!
//! # Usage
//!
//! ```bash
//! # Download the records of example.com as YAML
//! namecheap-cli get -k $KEY -u alice -s example -t com --output-format yaml -o hosts.yaml
//!
//! # Point www at a new address
//! namecheap-cli setone -s example -t com --name www --type A --address 192.0.2.10
//!
//! # Upload an edited file (domain read from the file)
//! namecheap-cli set -i hosts.yaml --input-format yaml
//!
//! # Credentials from the environment
//! export NAMECHEAP_KEY=... NAMECHEAP_USERNAME=alice
//! ```

mod cli;
mod commands;
mod config;
mod error;
mod io;
#[cfg(test)]
mod test_mocks;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::Settings;
use error::CliResult;

/// Initialize tracing to stderr; stdout carries command output.
///
/// - `quiet`: no logging at all
/// - `verbose`: debug level, including request URLs and raw responses
fn init_tracing(quiet: bool, verbose: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_ansi(false)
        .init();
}

async fn run(cli: Cli) -> CliResult<()> {
    let settings = Settings::from_command(&cli.command)?;
    commands::run(settings).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.global.quiet, cli.global.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_expected() {
                tracing::warn!("{e}");
            } else {
                tracing::error!("{e}");
            }
            if !tracing::enabled!(tracing::Level::WARN) {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
