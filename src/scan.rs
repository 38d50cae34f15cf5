use std::time::Instant;

use anyhow::Result;
use chrono::Utc;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::probes::context::{CONNECT_TIMEOUT_MS, MAX_READ_BYTES, READ_TIMEOUT_MS};
use crate::probes::helper::socket_addr;
use crate::probes::{MysqlProbe, Probe, ProbeContext};
use crate::report::{print_outcome, render_json};
use crate::types::ProbeReport;

/// Flags first, then explicit `--probe-param` overrides.
pub fn build_context(cli: &Cli) -> Result<ProbeContext> {
    let mut ctx = ProbeContext::default();
    ctx.insert(CONNECT_TIMEOUT_MS, cli.connect_timeout_ms.to_string());
    ctx.insert(READ_TIMEOUT_MS, cli.read_timeout_ms.to_string());
    ctx.insert(MAX_READ_BYTES, cli.max_read_bytes.to_string());
    ctx.apply_params(cli.probe_params.as_slice())?;
    Ok(ctx)
}

/// Probe one target and print the report.
///
/// Every probe outcome is printed and returns `Ok`; only bad configuration
/// is an error.
pub async fn run(cli: Cli) -> Result<()> {
    let ctx = build_context(&cli)?;
    let target = socket_addr(&cli.host, cli.port);
    let probe = MysqlProbe;

    debug!(%target, params = ?ctx.params, probe = probe.name(), "starting probe");
    let started = Instant::now();
    let probed_at = Utc::now();
    let outcome = probe.probe(&cli.host, cli.port, &ctx).await;
    let duration_ms = started.elapsed().as_millis() as u64;
    info!(%target, outcome = outcome.label(), duration_ms, "probe finished");

    if cli.json {
        let report = ProbeReport {
            target,
            host: cli.host,
            port: cli.port,
            probed_at,
            duration_ms,
            outcome,
        };
        println!("{}", render_json(&report)?);
    } else {
        print_outcome(&target, &outcome);
    }
    Ok(())
}
