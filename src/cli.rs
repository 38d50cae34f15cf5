use clap::{ArgAction, Parser};

use crate::probes::mysql::{DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_MAX_READ_BYTES, DEFAULT_READ_TIMEOUT_MS};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "mysql-probe",
    about = "Check whether a host speaks the MySQL protocol and decode its greeting"
)]
pub struct Cli {
    /// Target host name or IP address
    pub host: String,

    /// Target TCP port
    pub port: u16,

    #[arg(long, default_value_t = DEFAULT_CONNECT_TIMEOUT_MS)]
    pub connect_timeout_ms: u64,

    #[arg(long, default_value_t = DEFAULT_READ_TIMEOUT_MS)]
    pub read_timeout_ms: u64,

    /// Upper bound for the single greeting read
    #[arg(long, default_value_t = DEFAULT_MAX_READ_BYTES)]
    pub max_read_bytes: u64,

    /// Print the report as JSON instead of text
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub verbose: bool,

    /// Repeated key=value probe parameters, e.g. --probe-param read_timeout_ms=500
    #[arg(long = "probe-param", action = ArgAction::Append, value_name = "KEY=VALUE")]
    pub probe_params: Vec<String>,
}

impl Cli {
    pub fn parse() -> Self {
        Parser::parse()
    }
}
