use std::net::SocketAddr;

use mysql_probe::probes::{MysqlProbe, Probe, ProbeContext};
use mysql_probe::ProbeOutcome;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::time::{sleep, Duration};

/// Dummy server: accept once, send `reply`, keep the socket open for `hold`.
async fn serve_once(reply: Vec<u8>, hold: Duration) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        if !reply.is_empty() {
            let _ = socket.write_all(&reply).await;
        }
        sleep(hold).await;
    });
    addr
}

fn ctx(params: &[&str]) -> ProbeContext {
    let mut ctx = ProbeContext::default();
    ctx.apply_params(params).unwrap();
    ctx
}

fn greeting(version: &str, plugin: Option<&str>) -> Vec<u8> {
    let mut body = vec![0x0a];
    body.extend_from_slice(version.as_bytes());
    body.push(0);
    body.extend_from_slice(&1234u32.to_le_bytes());
    body.push(0x15);
    body.extend_from_slice(b"12345678");
    body.extend_from_slice(&0xf7ffu16.to_le_bytes());
    body.push(0xff);
    body.extend_from_slice(&0x0002u16.to_le_bytes());
    if let Some(p) = plugin {
        body.extend_from_slice(p.as_bytes());
        body.push(0);
    }
    let mut packet = (body.len() as u32).to_le_bytes()[..3].to_vec();
    packet.push(0);
    packet.extend_from_slice(&body);
    packet
}

#[tokio::test]
async fn identifies_dummy_server() {
    let addr = serve_once(greeting("8.0.39", Some("caching_sha2_password")), Duration::from_millis(200)).await;

    let out = MysqlProbe.probe("127.0.0.1", addr.port(), &ctx(&[])).await;
    let hs = out.handshake().expect("server should be identified");
    assert_eq!(hs.protocol_version, 10);
    assert_eq!(hs.server_version, "8.0.39");
    assert_eq!(hs.thread_id, 1234);
    assert_eq!(&hs.auth_salt, b"12345678");
    assert_eq!(hs.language, 0xff);
    assert_eq!(hs.auth_plugin_name.as_deref(), Some("caching_sha2_password"));
    assert_eq!(hs.packet_length as usize, greeting("8.0.39", Some("caching_sha2_password")).len() - 4);
}

#[tokio::test]
async fn non_mysql_banner_is_unrecognized() {
    let addr = serve_once(b"220 dummy.ftp FTP Service Ready\r\n".to_vec(), Duration::from_millis(200)).await;

    let out = MysqlProbe.probe("127.0.0.1", addr.port(), &ctx(&[])).await;
    match out {
        ProbeOutcome::Unrecognized { reason } => assert!(reason.contains("server_version"), "{reason}"),
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[tokio::test]
async fn err_packet_is_refused() {
    let mut reply = vec![0x00, 0x00, 0x00, 0x00, 0xff, 0x6a, 0x04];
    reply.extend_from_slice(b"Host '127.0.0.1' is not allowed to connect to this MySQL server");
    let len = (reply.len() - 4) as u32;
    reply[..3].copy_from_slice(&len.to_le_bytes()[..3]);
    let addr = serve_once(reply, Duration::from_millis(200)).await;

    let out = MysqlProbe.probe("127.0.0.1", addr.port(), &ctx(&[])).await;
    match out {
        ProbeOutcome::Refused { code, message, .. } => {
            assert_eq!(code, 1130);
            assert!(message.contains("not allowed"));
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[tokio::test]
async fn closed_port_is_not_running() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let out = MysqlProbe.probe("127.0.0.1", port, &ctx(&["connect_timeout_ms=500"])).await;
    assert_eq!(out.label(), "not_running");
}

#[tokio::test]
async fn silent_server_times_out() {
    let addr = serve_once(Vec::new(), Duration::from_secs(2)).await;

    let out = MysqlProbe.probe("127.0.0.1", addr.port(), &ctx(&["read_timeout_ms=100"])).await;
    match out {
        ProbeOutcome::NotRunning { reason } => assert!(reason.contains("timed out"), "{reason}"),
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[tokio::test]
async fn server_closing_immediately_is_not_running() {
    let addr = serve_once(Vec::new(), Duration::ZERO).await;

    let out = MysqlProbe.probe("127.0.0.1", addr.port(), &ctx(&[])).await;
    assert_eq!(out.label(), "not_running");
}

#[tokio::test]
async fn read_is_bounded() {
    let long_version = "9".repeat(500);
    let addr = serve_once(greeting(&long_version, None), Duration::from_millis(200)).await;

    let out = MysqlProbe.probe("127.0.0.1", addr.port(), &ctx(&["max_read_bytes=64"])).await;
    assert_eq!(out.label(), "unrecognized");
}
