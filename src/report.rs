use colored::*;

use crate::handshake::HandshakeRecord;
use crate::types::{ProbeOutcome, ProbeReport};

/// Plain-text report, one line per entry. The first line states the verdict.
pub fn render_lines(target: &str, outcome: &ProbeOutcome) -> Vec<String> {
    match outcome {
        ProbeOutcome::NotRunning { reason } => vec![format!(
            "MySQL does not appear to be running on {} ({})",
            target, reason
        )],
        ProbeOutcome::Unrecognized { reason } => vec![format!(
            "Could not identify a MySQL service on {}: {}",
            target, reason
        )],
        ProbeOutcome::Refused { code, sql_state, message } => {
            let state = sql_state.as_deref().map(|s| format!(" ({})", s)).unwrap_or_default();
            vec![format!(
                "MySQL appears to be running on {} but refused the connection: ERROR {}{}: {}",
                target, code, state, message
            )]
        }
        ProbeOutcome::Identified(hs) => {
            let mut lines = vec![format!("MySQL appears to be running on {}", target)];
            lines.extend(handshake_lines(target, hs));
            lines
        }
    }
}

fn handshake_lines(target: &str, hs: &HandshakeRecord) -> Vec<String> {
    let language = match hs.charset_name() {
        Some(name) => format!("0x{:x} ({})", hs.language, name),
        None => format!("0x{:x}", hs.language),
    };
    let caps = hs.capability_names();
    let status = hs.status_names();

    vec![
        format!("MySQL Server Details for {}", target),
        format!("Greeting Packet Length: {}", hs.packet_length),
        format!("Greeting Packet Number: {}", hs.packet_number),
        format!("Protocol Version: {}", hs.protocol_version),
        format!("Server Version: {}", hs.server_version),
        format!("Thread ID: {}", hs.thread_id),
        format!("Server Language: {}", language),
        format!(
            "Salt: {} (hex {})",
            String::from_utf8_lossy(&hs.auth_salt),
            hex::encode(hs.auth_salt)
        ),
        format!("Server Capabilities: 0x{:x}", hs.server_capabilities),
        format!("  {}", if caps.is_empty() { "-".to_string() } else { caps.join(", ") }),
        format!("Server Status: 0x{:x}", hs.server_status),
        format!("  {}", if status.is_empty() { "-".to_string() } else { status.join(", ") }),
        format!("Auth Plugin Name: {}", hs.auth_plugin_name.as_deref().unwrap_or("")),
    ]
}

pub fn print_outcome(target: &str, outcome: &ProbeOutcome) {
    let lines = render_lines(target, outcome);
    let Some((verdict, details)) = lines.split_first() else {
        return;
    };
    let verdict = match outcome {
        ProbeOutcome::Identified(_) => verdict.green().bold(),
        ProbeOutcome::Refused { .. } => verdict.yellow(),
        ProbeOutcome::NotRunning { .. } | ProbeOutcome::Unrecognized { .. } => verdict.red(),
    };
    println!("{}", verdict);
    for line in details {
        println!("{}", line);
    }
}

pub fn render_json(report: &ProbeReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
