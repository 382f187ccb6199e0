//! Validated, immutable settings for each command.
//!
//! Parsed arguments are checked once here; commands only ever see the
//! resulting [`Settings`].

use std::path::PathBuf;
use std::time::Duration;

use namecheap_provider::{DomainHostsResult, DomainParams, Format, Host, NamecheapCredentials, codec};

use crate::cli::{
    ApiArgs, Commands, ConvertArgs, DomainArgs, GetArgs, InputArgs, OutputArgs, RecordArgs,
    SetArgs, SetOneArgs,
};
use crate::error::{CliError, CliResult};

/// Registrar connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub credentials: NamecheapCredentials,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSettings {
    /// `None` reads stdin.
    pub file: Option<PathBuf>,
    pub format: Format,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    /// `None` writes stdout.
    pub file: Option<PathBuf>,
    pub format: Format,
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetSettings {
    pub api: ApiSettings,
    pub domain: DomainParams,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetSettings {
    pub api: ApiSettings,
    /// Explicit domain parts; missing ones come from the input's `Domain`.
    pub sld: Option<String>,
    pub tld: Option<String>,
    pub input: InputSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetOneSettings {
    pub api: ApiSettings,
    pub domain: DomainParams,
    /// The record as given on the command line (no host-id yet).
    pub record: Host,
    pub delete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSettings {
    /// Replaces the record set's `Domain` when given.
    pub domain: Option<DomainParams>,
    pub input: InputSettings,
    pub output: OutputSettings,
}

/// One fully validated command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settings {
    Get(GetSettings),
    Set(SetSettings),
    SetOne(SetOneSettings),
    Convert(ConvertSettings),
    Version,
}

impl Settings {
    pub fn from_command(command: &Commands) -> CliResult<Self> {
        Ok(match command {
            Commands::Get(args) => Self::Get(GetSettings::from_args(args)?),
            Commands::Set(args) => Self::Set(SetSettings::from_args(args)?),
            Commands::Setone(args) => Self::SetOne(SetOneSettings::from_args(args)?),
            Commands::Convert(args) => Self::Convert(ConvertSettings::from_args(args)?),
            Commands::Version => Self::Version,
        })
    }
}

impl GetSettings {
    fn from_args(args: &GetArgs) -> CliResult<Self> {
        let mut missing = Vec::new();
        let api = api_settings(&args.api, &mut missing);
        let domain = required_domain(&args.domain, &mut missing);
        ensure_present(&missing)?;
        Ok(Self {
            api: api.ok_or_else(missing_values)?,
            domain: domain.ok_or_else(missing_values)?,
            output: output_settings(&args.output, Format::Xml)?,
        })
    }
}

impl SetSettings {
    fn from_args(args: &SetArgs) -> CliResult<Self> {
        let mut missing = Vec::new();
        let api = api_settings(&args.api, &mut missing);
        ensure_present(&missing)?;
        Ok(Self {
            api: api.ok_or_else(missing_values)?,
            sld: non_empty(args.domain.sld.as_deref()).map(str::to_string),
            tld: non_empty(args.domain.tld.as_deref()).map(str::to_string),
            input: input_settings(&args.input)?,
        })
    }

    /// Resolve the target domain, falling back to the input's `Domain`
    /// for whichever part was not given explicitly.
    pub fn resolve_domain(&self, hosts: &DomainHostsResult) -> CliResult<DomainParams> {
        let parts = hosts.domain_parts();
        Ok(DomainParams::new(
            domain_part(self.sld.as_deref(), parts.map(|(sld, _)| sld), "sld")?,
            domain_part(self.tld.as_deref(), parts.map(|(_, tld)| tld), "tld")?,
        ))
    }
}

fn domain_part(explicit: Option<&str>, from_input: Option<&str>, flag: &str) -> CliResult<String> {
    explicit
        .or(from_input)
        .map(str::to_string)
        .ok_or_else(|| {
            CliError::Configuration(format!(
                "Neither --{flag} was specified nor the input's Domain was set"
            ))
        })
}

impl SetOneSettings {
    fn from_args(args: &SetOneArgs) -> CliResult<Self> {
        let mut missing = Vec::new();
        let api = api_settings(&args.api, &mut missing);
        let domain = required_domain(&args.domain, &mut missing);
        let record = record_from_args(&args.record, &mut missing);
        ensure_present(&missing)?;
        Ok(Self {
            api: api.ok_or_else(missing_values)?,
            domain: domain.ok_or_else(missing_values)?,
            record: record.ok_or_else(missing_values)?,
            delete: args.record.delete,
        })
    }
}

impl ConvertSettings {
    fn from_args(args: &ConvertArgs) -> CliResult<Self> {
        let input = input_settings(&args.input)?;
        let output = output_settings(&args.output, Format::Yaml)?;
        codec::ensure_distinct(input.format, output.format)?;
        let domain = match (
            non_empty(args.domain.sld.as_deref()),
            non_empty(args.domain.tld.as_deref()),
        ) {
            (Some(sld), Some(tld)) => Some(DomainParams::new(sld, tld)),
            _ => None,
        };
        Ok(Self {
            domain,
            input,
            output,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn required<'a>(
    value: Option<&'a str>,
    flag: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<&'a str> {
    let value = non_empty(value);
    if value.is_none() {
        missing.push(flag);
    }
    value
}

fn ensure_present(missing: &[&str]) -> CliResult<()> {
    if missing.is_empty() {
        return Ok(());
    }
    let flags: Vec<String> = missing.iter().map(|flag| format!("--{flag}")).collect();
    Err(CliError::Configuration(format!(
        "Missing required option(s): {}",
        flags.join(", ")
    )))
}

fn missing_values() -> CliError {
    CliError::Configuration("Missing required options".to_string())
}

fn api_settings(args: &ApiArgs, missing: &mut Vec<&'static str>) -> Option<ApiSettings> {
    let key = required(args.key.as_deref(), "key", missing);
    let username = required(args.username.as_deref(), "username", missing);
    Some(ApiSettings {
        credentials: NamecheapCredentials {
            username: username?.to_string(),
            api_key: key?.to_string(),
            sandbox: args.sandbox,
            client_ip: args.client_ip.clone(),
        },
        timeout: Duration::from_secs(args.timeout),
    })
}

fn required_domain(args: &DomainArgs, missing: &mut Vec<&'static str>) -> Option<DomainParams> {
    let tld = required(args.tld.as_deref(), "tld", missing);
    let sld = required(args.sld.as_deref(), "sld", missing);
    Some(DomainParams::new(sld?, tld?))
}

fn record_from_args(args: &RecordArgs, missing: &mut Vec<&'static str>) -> Option<Host> {
    let name = required(args.name.as_deref(), "name", missing);
    let record_type = required(args.record_type.as_deref(), "type", missing);
    let address = required(args.address.as_deref(), "address", missing);
    Some(Host {
        name: name?.to_string(),
        record_type: record_type?.to_string(),
        address: address?.to_string(),
        mx_pref: args.mxpref.clone(),
        ttl: args.ttl.clone(),
        friendly_name: args.friendlyname.clone(),
        is_active: args.isactive.to_string(),
        ..Default::default()
    })
}

fn input_settings(args: &InputArgs) -> CliResult<InputSettings> {
    Ok(InputSettings {
        file: args.input_file.clone(),
        format: args.input_format.parse()?,
    })
}

fn output_settings(args: &OutputArgs, default_format: Format) -> CliResult<OutputSettings> {
    let format = match args.output_format.as_deref() {
        Some(selector) => selector.parse()?,
        None => default_format,
    };
    Ok(OutputSettings {
        file: args.output_file.clone(),
        format,
        force: args.force,
    })
}
