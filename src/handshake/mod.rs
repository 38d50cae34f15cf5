//! Decoder for the initial greeting a MySQL/MariaDB server sends on connect.
//!
//! The decoder is a pure function over one already-read buffer. All reads
//! go through a bounds-checked [`cursor::Cursor`], so short or hostile input
//! produces a [`DecodeError`] instead of a panic.
//!
//! Only the first 8 salt bytes are decoded. The auth-data length byte is
//! skipped and the capability-gated second salt part used by protocol 4.1
//! servers is not read.

mod cursor;
mod error;
pub mod flags;

use serde::{Serialize, Serializer};

use cursor::Cursor;
pub use error::DecodeError;

/// Protocol generation spoken by every server since MySQL 3.21.
pub const PROTOCOL_VERSION_10: u8 = 10;

/// Shortest buffer that can decode: 23 fixed bytes plus the version NUL.
pub const MIN_PACKET_LEN: usize = 24;

/// First payload byte of an ERR packet.
pub const ERR_PACKET_MARKER: u8 = 0xff;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandshakeRecord {
    pub packet_length: u32,
    pub packet_number: u8,
    pub protocol_version: u8,
    pub server_version: String,
    pub thread_id: u32,
    #[serde(serialize_with = "serialize_hex")]
    pub auth_salt: [u8; 8],
    pub server_capabilities: u16,
    pub language: u8,
    pub server_status: u16,
    pub auth_plugin_name: Option<String>,
}

impl HandshakeRecord {
    pub fn capability_names(&self) -> Vec<&'static str> {
        flags::capability_names(self.server_capabilities)
    }

    pub fn status_names(&self) -> Vec<&'static str> {
        flags::status_names(self.server_status)
    }

    pub fn charset_name(&self) -> Option<&'static str> {
        flags::charset_name(self.language)
    }
}

fn serialize_hex<S: Serializer>(bytes: &[u8; 8], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&hex::encode(bytes))
}

/// Decode a server greeting, header included.
pub fn decode(packet: &[u8]) -> Result<HandshakeRecord, DecodeError> {
    if packet.is_empty() {
        return Err(DecodeError::EmptyPacket);
    }
    let mut c = Cursor::new(packet);

    let packet_length = c.u24_le("packet_length")?;
    let packet_number = c.u8("packet_number")?;
    let protocol_version = c.u8("protocol_version")?;
    let server_version = String::from_utf8_lossy(c.cstr("server_version")?).into_owned();
    let thread_id = c.u32_le("thread_id")?;
    // declared auth-data length; the 8-byte first part is read regardless
    c.u8("auth_data_length")?;
    let auth_salt = c.array::<8>("auth_salt")?;
    let server_capabilities = c.u16_le("server_capabilities")?;
    let language = c.u8("language")?;
    let server_status = c.u16_le("server_status")?;

    let auth_plugin_name = if c.is_exhausted() {
        None
    } else {
        Some(String::from_utf8_lossy(c.cstr("auth_plugin_name")?).into_owned())
    };

    Ok(HandshakeRecord {
        packet_length,
        packet_number,
        protocol_version,
        server_version,
        thread_id,
        auth_salt,
        server_capabilities,
        language,
        server_status,
        auth_plugin_name,
    })
}

/// ERR packet sent in place of a greeting, e.g. when the client host is
/// not allowed to connect or the server is out of connections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerError {
    pub code: u16,
    pub sql_state: Option<String>,
    pub message: String,
}

/// Returns `None` unless `packet` is a well-formed ERR packet.
pub fn parse_server_error(packet: &[u8]) -> Option<ServerError> {
    let mut c = Cursor::new(packet);
    c.take("header", 4).ok()?;
    if c.u8("marker").ok()? != ERR_PACKET_MARKER {
        return None;
    }
    let code = c.u16_le("error_code").ok()?;
    let rest = c.rest();
    let (sql_state, message) = match rest {
        [b'#', state @ ..] if state.len() >= 5 => (
            Some(String::from_utf8_lossy(&state[..5]).into_owned()),
            &state[5..],
        ),
        _ => (None, rest),
    };
    Some(ServerError {
        code,
        sql_state,
        message: String::from_utf8_lossy(message).trim_end_matches('\0').to_string(),
    })
}
