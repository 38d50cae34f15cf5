// Names for the low 16 capability bits, the status flags and the common
// collation ids sent in the greeting.

pub const CLIENT_LONG_PASSWORD: u16 = 0x0001;
pub const CLIENT_FOUND_ROWS: u16 = 0x0002;
pub const CLIENT_LONG_FLAG: u16 = 0x0004;
pub const CLIENT_CONNECT_WITH_DB: u16 = 0x0008;
pub const CLIENT_NO_SCHEMA: u16 = 0x0010;
pub const CLIENT_COMPRESS: u16 = 0x0020;
pub const CLIENT_ODBC: u16 = 0x0040;
pub const CLIENT_LOCAL_FILES: u16 = 0x0080;
pub const CLIENT_IGNORE_SPACE: u16 = 0x0100;
pub const CLIENT_PROTOCOL_41: u16 = 0x0200;
pub const CLIENT_INTERACTIVE: u16 = 0x0400;
pub const CLIENT_SSL: u16 = 0x0800;
pub const CLIENT_IGNORE_SIGPIPE: u16 = 0x1000;
pub const CLIENT_TRANSACTIONS: u16 = 0x2000;
pub const CLIENT_RESERVED: u16 = 0x4000;
pub const CLIENT_SECURE_CONNECTION: u16 = 0x8000;

const CAPABILITIES: [(u16, &str); 16] = [
    (CLIENT_LONG_PASSWORD, "CLIENT_LONG_PASSWORD"),
    (CLIENT_FOUND_ROWS, "CLIENT_FOUND_ROWS"),
    (CLIENT_LONG_FLAG, "CLIENT_LONG_FLAG"),
    (CLIENT_CONNECT_WITH_DB, "CLIENT_CONNECT_WITH_DB"),
    (CLIENT_NO_SCHEMA, "CLIENT_NO_SCHEMA"),
    (CLIENT_COMPRESS, "CLIENT_COMPRESS"),
    (CLIENT_ODBC, "CLIENT_ODBC"),
    (CLIENT_LOCAL_FILES, "CLIENT_LOCAL_FILES"),
    (CLIENT_IGNORE_SPACE, "CLIENT_IGNORE_SPACE"),
    (CLIENT_PROTOCOL_41, "CLIENT_PROTOCOL_41"),
    (CLIENT_INTERACTIVE, "CLIENT_INTERACTIVE"),
    (CLIENT_SSL, "CLIENT_SSL"),
    (CLIENT_IGNORE_SIGPIPE, "CLIENT_IGNORE_SIGPIPE"),
    (CLIENT_TRANSACTIONS, "CLIENT_TRANSACTIONS"),
    (CLIENT_RESERVED, "CLIENT_RESERVED"),
    (CLIENT_SECURE_CONNECTION, "CLIENT_SECURE_CONNECTION"),
];

const STATUS_FLAGS: [(u16, &str); 14] = [
    (0x0001, "SERVER_STATUS_IN_TRANS"),
    (0x0002, "SERVER_STATUS_AUTOCOMMIT"),
    (0x0008, "SERVER_MORE_RESULTS_EXISTS"),
    (0x0010, "SERVER_QUERY_NO_GOOD_INDEX_USED"),
    (0x0020, "SERVER_QUERY_NO_INDEX_USED"),
    (0x0040, "SERVER_STATUS_CURSOR_EXISTS"),
    (0x0080, "SERVER_STATUS_LAST_ROW_SENT"),
    (0x0100, "SERVER_STATUS_DB_DROPPED"),
    (0x0200, "SERVER_STATUS_NO_BACKSLASH_ESCAPES"),
    (0x0400, "SERVER_STATUS_METADATA_CHANGED"),
    (0x0800, "SERVER_QUERY_WAS_SLOW"),
    (0x1000, "SERVER_PS_OUT_PARAMS"),
    (0x2000, "SERVER_STATUS_IN_TRANS_READONLY"),
    (0x4000, "SERVER_SESSION_STATE_CHANGED"),
];

fn names(bits: u16, table: &[(u16, &'static str)]) -> Vec<&'static str> {
    table
        .iter()
        .filter(|(bit, _)| bits & bit != 0)
        .map(|&(_, name)| name)
        .collect()
}

pub fn capability_names(bits: u16) -> Vec<&'static str> {
    names(bits, &CAPABILITIES)
}

pub fn status_names(bits: u16) -> Vec<&'static str> {
    names(bits, &STATUS_FLAGS)
}

/// Collation name for the handful of ids servers commonly default to.
pub fn charset_name(id: u8) -> Option<&'static str> {
    let name = match id {
        0x08 => "latin1_swedish_ci",
        0x1c => "gbk_chinese_ci",
        0x21 => "utf8_general_ci",
        0x2d => "utf8mb4_general_ci",
        0x2e => "utf8mb4_bin",
        0x3f => "binary",
        0x53 => "utf8_bin",
        0xc0 => "utf8_unicode_ci",
        0xe0 => "utf8mb4_unicode_ci",
        0xff => "utf8mb4_0900_ai_ci",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_capability_bits() {
        let names = capability_names(CLIENT_PROTOCOL_41 | CLIENT_SSL | CLIENT_SECURE_CONNECTION);
        assert_eq!(names, vec!["CLIENT_PROTOCOL_41", "CLIENT_SSL", "CLIENT_SECURE_CONNECTION"]);
        assert!(capability_names(0).is_empty());
        assert_eq!(capability_names(0xffff).len(), 16);
    }

    #[test]
    fn decodes_status_bits() {
        assert_eq!(status_names(0x0002), vec!["SERVER_STATUS_AUTOCOMMIT"]);
        // 0x0004 is unassigned
        assert!(status_names(0x0004).is_empty());
    }

    #[test]
    fn known_charsets() {
        assert_eq!(charset_name(0x21), Some("utf8_general_ci"));
        assert_eq!(charset_name(0xff), Some("utf8mb4_0900_ai_ci"));
        assert_eq!(charset_name(0x01), None);
    }
}
