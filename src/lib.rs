pub mod cli;
pub mod handshake;
pub mod probes;
pub mod report;
pub mod scan;
pub mod types;

pub use handshake::{decode, DecodeError, HandshakeRecord};
pub use scan::run;
pub use types::ProbeOutcome;

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. `RUST_LOG` wins over `verbose`.
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "mysql_probe=debug" } else { "mysql_probe=warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .try_init();
}
