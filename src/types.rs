use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::handshake::HandshakeRecord;

/// What a single probe learned about the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// Connect or read failed; nothing is listening or it never spoke.
    NotRunning { reason: String },
    /// Something answered, but not with a decodable greeting.
    Unrecognized { reason: String },
    /// A MySQL server answered with an ERR packet instead of a greeting.
    Refused {
        code: u16,
        sql_state: Option<String>,
        message: String,
    },
    Identified(HandshakeRecord),
}

impl ProbeOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotRunning { .. } => "not_running",
            Self::Unrecognized { .. } => "unrecognized",
            Self::Refused { .. } => "refused",
            Self::Identified(_) => "identified",
        }
    }

    pub fn handshake(&self) -> Option<&HandshakeRecord> {
        match self {
            Self::Identified(hs) => Some(hs),
            _ => None,
        }
    }
}

/// JSON document printed with `--json`.
#[derive(Debug, Serialize)]
pub struct ProbeReport {
    pub target: String,
    pub host: String,
    pub port: u16,
    pub probed_at: DateTime<Utc>,
    pub duration_ms: u64,
    #[serde(flatten)]
    pub outcome: ProbeOutcome,
}
