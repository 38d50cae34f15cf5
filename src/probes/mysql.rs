use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::context::{CONNECT_TIMEOUT_MS, MAX_READ_BYTES, READ_TIMEOUT_MS};
use super::helper::{connect_with_timeout, read_once, socket_addr};
use super::{Probe, ProbeContext};
use crate::handshake::{self, ERR_PACKET_MARKER, PROTOCOL_VERSION_10};
use crate::types::ProbeOutcome;

pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 2000;
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 2000;
pub const DEFAULT_MAX_READ_BYTES: u64 = 1024;

// header + protocol byte, the least a read can usefully return
const MIN_READ_BYTES: u64 = 5;
const MAX_READ_BYTES_LIMIT: u64 = 64 * 1024;

pub struct MysqlProbe;

#[async_trait]
impl Probe for MysqlProbe {
    async fn probe(&self, host: &str, port: u16, ctx: &ProbeContext) -> ProbeOutcome {
        let addr = socket_addr(host, port);
        let connect_ms = ctx.get_u64(CONNECT_TIMEOUT_MS, DEFAULT_CONNECT_TIMEOUT_MS);
        let read_ms = ctx.get_u64(READ_TIMEOUT_MS, DEFAULT_READ_TIMEOUT_MS);
        let max_bytes = ctx
            .get_u64(MAX_READ_BYTES, DEFAULT_MAX_READ_BYTES)
            .clamp(MIN_READ_BYTES, MAX_READ_BYTES_LIMIT) as usize;

        if !self.ports().contains(&port) {
            debug!(port, "probing non-standard mysql port");
        }

        // 1) Connect
        let mut stream = match connect_with_timeout(&addr, connect_ms).await {
            Ok(s) => s,
            Err(e) => {
                debug!(%addr, error = %e, "connect failed");
                return ProbeOutcome::NotRunning { reason: e.to_string() };
            }
        };
        debug!(%addr, "connected");

        // 2) Read the greeting, once
        let packet = match read_once(&mut stream, &addr, max_bytes, read_ms).await {
            Ok(buf) => buf,
            Err(e) => {
                debug!(%addr, error = %e, "greeting read failed");
                return ProbeOutcome::NotRunning { reason: e.to_string() };
            }
        };
        debug!(%addr, bytes = packet.len(), "greeting received");

        classify(&packet)
    }

    fn ports(&self) -> Vec<u16> {
        vec![3306, 3307]
    }

    fn name(&self) -> &'static str {
        "mysql"
    }
}

/// Map one raw greeting buffer to an outcome.
pub fn classify(packet: &[u8]) -> ProbeOutcome {
    if packet.get(4) == Some(&ERR_PACKET_MARKER) {
        if let Some(err) = handshake::parse_server_error(packet) {
            info!(code = err.code, message = %err.message, "server refused connection");
            return ProbeOutcome::Refused {
                code: err.code,
                sql_state: err.sql_state,
                message: err.message,
            };
        }
    }

    match handshake::decode(packet) {
        Ok(hs) => {
            if hs.protocol_version != PROTOCOL_VERSION_10 {
                warn!(version = hs.protocol_version, "unexpected protocol version");
            }
            let payload = packet.len().saturating_sub(4);
            if hs.packet_length as usize != payload {
                debug!(
                    declared = hs.packet_length,
                    read = payload,
                    "declared length differs from bytes read"
                );
            }
            ProbeOutcome::Identified(hs)
        }
        Err(e) => {
            warn!(error = %e, bytes = packet.len(), "greeting did not decode");
            ProbeOutcome::Unrecognized { reason: e.to_string() }
        }
    }
}
