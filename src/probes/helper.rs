use std::time::Duration;

use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::time::timeout;

#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("{op} to {addr} timed out after {ms} ms")]
    Timeout { op: &'static str, addr: String, ms: u64 },
    #[error("{op} {addr}: {source}")]
    Io {
        op: &'static str,
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{addr} closed the connection without sending data")]
    Closed { addr: String },
}

/// `host:port`, bracketing bare IPv6 literals.
pub fn socket_addr(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}

pub async fn connect_with_timeout(addr: &str, timeout_ms: u64) -> Result<TcpStream, ConnectError> {
    match timeout(Duration::from_millis(timeout_ms), TcpStream::connect(addr)).await {
        Ok(Ok(stream)) => Ok(stream),
        Ok(Err(source)) => Err(ConnectError::Io { op: "connect", addr: addr.to_string(), source }),
        Err(_) => Err(ConnectError::Timeout { op: "connect", addr: addr.to_string(), ms: timeout_ms }),
    }
}

/// One read of at most `max_bytes`. The buffer is truncated to what arrived;
/// no attempt is made to collect a full packet.
pub async fn read_once(
    stream: &mut TcpStream,
    addr: &str,
    max_bytes: usize,
    timeout_ms: u64,
) -> Result<Vec<u8>, ConnectError> {
    let mut buf = vec![0u8; max_bytes];
    match timeout(Duration::from_millis(timeout_ms), stream.read(&mut buf)).await {
        Ok(Ok(0)) => Err(ConnectError::Closed { addr: addr.to_string() }),
        Ok(Ok(n)) => {
            buf.truncate(n);
            Ok(buf)
        }
        Ok(Err(source)) => Err(ConnectError::Io { op: "read from", addr: addr.to_string(), source }),
        Err(_) => Err(ConnectError::Timeout { op: "read from", addr: addr.to_string(), ms: timeout_ms }),
    }
}
