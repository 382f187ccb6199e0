//! CLI argument parsing.
//!
//! Every option can also be supplied through an environment variable named
//! `NAMECHEAP_<OPTION>` (e.g. `NAMECHEAP_KEY`, `NAMECHEAP_CLIENT_IP`).

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Namecheap DNS command line interface.
#[derive(Parser, Debug)]
#[command(name = "namecheap-cli")]
#[command(version)]
#[command(about = "Namecheap DNS command line interface")]
#[command(long_about = "Download, upload, edit and convert Namecheap DNS host records.\n\n\
    All option values can be provided via env vars starting with NAMECHEAP_*")]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options available to all commands.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable debug logging (request URLs, raw responses).
    #[arg(short = 'v', long, env = "NAMECHEAP_VERBOSE", global = true)]
    pub verbose: bool,

    /// Suppress all logging output.
    #[arg(short = 'q', long, env = "NAMECHEAP_QUIET", global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download Namecheap DNS configuration
    #[command(visible_alias = "g")]
    Get(GetArgs),

    /// Upload Namecheap DNS configuration
    #[command(visible_alias = "s")]
    Set(SetArgs),

    /// Create, update or delete a single DNS entry
    #[command(visible_alias = "o")]
    Setone(SetOneArgs),

    /// Convert Namecheap DNS configuration between local storage formats
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Print version information
    Version,
}

/// Registrar account and connection options.
#[derive(Args, Debug, Clone, Default)]
pub struct ApiArgs {
    /// [Required] Namecheap API key
    #[arg(short = 'k', long, env = "NAMECHEAP_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// [Required] Namecheap user
    #[arg(short = 'u', long, env = "NAMECHEAP_USERNAME")]
    pub username: Option<String>,

    /// Use Namecheap sandbox API
    #[arg(long, env = "NAMECHEAP_SANDBOX")]
    pub sandbox: bool,

    /// Client IP. This is not really required
    #[arg(long, env = "NAMECHEAP_CLIENT_IP", default_value = "127.0.0.1")]
    pub client_ip: String,

    /// Request timeout in seconds
    #[arg(long, env = "NAMECHEAP_TIMEOUT", default_value_t = namecheap_provider::DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,
}

/// Domain selection.
#[derive(Args, Debug, Clone, Default)]
pub struct DomainArgs {
    /// Namecheap top-level domain, e.g.: 'com'
    #[arg(short = 't', long, env = "NAMECHEAP_TLD")]
    pub tld: Option<String>,

    /// Namecheap second-level domain, e.g.: 'example'
    #[arg(short = 's', long, env = "NAMECHEAP_SLD")]
    pub sld: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Input file. If omitted, stdin is used until 2 consecutive blank lines are read
    #[arg(short = 'i', long, env = "NAMECHEAP_INPUT_FILE")]
    pub input_file: Option<PathBuf>,

    /// Input format. Supported: xml, yaml, json
    #[arg(long, env = "NAMECHEAP_INPUT_FORMAT", default_value = "xml")]
    pub input_format: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output file. If omitted, outputs to stdout
    #[arg(short = 'o', long, env = "NAMECHEAP_OUTPUT_FILE")]
    pub output_file: Option<PathBuf>,

    /// Output format. Supported: xml, yaml, json [default: xml for get, yaml for convert]
    #[arg(long, env = "NAMECHEAP_OUTPUT_FORMAT")]
    pub output_format: Option<String>,

    /// Overwrite the output file if it exists
    #[arg(long, env = "NAMECHEAP_FORCE")]
    pub force: bool,
}

/// Fields of the record edited by `setone`.
#[derive(Args, Debug, Clone, Default)]
pub struct RecordArgs {
    /// [Required] Record name
    #[arg(long, env = "NAMECHEAP_NAME")]
    pub name: Option<String>,

    /// [Required] Record type
    #[arg(long = "type", env = "NAMECHEAP_TYPE")]
    pub record_type: Option<String>,

    /// [Required] Record value
    #[arg(long, env = "NAMECHEAP_ADDRESS")]
    pub address: Option<String>,

    /// MXPref
    #[arg(long, env = "NAMECHEAP_MXPREF", default_value = "")]
    pub mxpref: String,

    /// Time to live in seconds. 1799 is Namecheap's equivalent to 'Automatic'
    #[arg(long, env = "NAMECHEAP_TTL", default_value = "1799")]
    pub ttl: String,

    /// Friendly name
    #[arg(long, env = "NAMECHEAP_FRIENDLYNAME", default_value = "")]
    pub friendlyname: String,

    /// Active state
    #[arg(long, env = "NAMECHEAP_ISACTIVE", default_value_t = true, action = ArgAction::Set)]
    pub isactive: bool,

    /// Delete DNS entry
    #[arg(long, env = "NAMECHEAP_DELETE")]
    pub delete: bool,
}

#[derive(Args, Debug, Clone)]
pub struct GetArgs {
    #[command(flatten)]
    pub api: ApiArgs,
    #[command(flatten)]
    pub domain: DomainArgs,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SetArgs {
    #[command(flatten)]
    pub api: ApiArgs,
    #[command(flatten)]
    pub domain: DomainArgs,
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SetOneArgs {
    #[command(flatten)]
    pub api: ApiArgs,
    #[command(flatten)]
    pub domain: DomainArgs,
    #[command(flatten)]
    pub record: RecordArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub domain: DomainArgs,
    #[command(flatten)]
    pub input: InputArgs,
    #[command(flatten)]
    pub output: OutputArgs,
}
