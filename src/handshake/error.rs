#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("empty packet")]
    EmptyPacket,
    #[error("packet truncated at {field}: needed {needed} bytes, {available} available")]
    TruncatedPacket {
        field: &'static str,
        needed: usize,
        available: usize,
    },
    #[error("unterminated string in {field}")]
    UnterminatedString { field: &'static str },
}

impl DecodeError {
    /// True when the buffer ran out before a field was complete.
    pub fn is_truncation(&self) -> bool {
        matches!(self, Self::TruncatedPacket { .. } | Self::UnterminatedString { .. })
    }
}
