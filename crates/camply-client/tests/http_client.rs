//! `CamplyClient` against a scripted HTTP stub.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use camply_client::{CamplyClient, ClientConfig, ClientError};
use rstest::rstest;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const PROVIDERS: &str = r#"[{"id":1,"name":"RecreationDotGov","description":null,"url":"https://www.recreation.gov","enabled":true}]"#;
const UNAVAILABLE: &str = r#"{"code":"service_unavailable","message":"database unavailable","trace_id":"t-503"}"#;

/// Answers each connection with the next scripted response; the last one
/// repeats.
struct Stub {
    addr: SocketAddr,
    request_lines: Arc<Mutex<Vec<String>>>,
}

impl Stub {
    async fn start(responses: Vec<(u16, &'static str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
        let addr = listener.local_addr().expect("stub addr");
        let request_lines = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&request_lines);
        tokio::spawn(async move {
            let mut served = 0_usize;
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let (status, body) = responses[served.min(responses.len() - 1)];
                served += 1;

                let mut head = Vec::new();
                let mut chunk = [0_u8; 1024];
                while !head.windows(4).any(|window| window == b"\r\n\r\n") {
                    let read = socket.read(&mut chunk).await.expect("read request");
                    if read == 0 {
                        break;
                    }
                    head.extend_from_slice(&chunk[..read]);
                }
                let text = String::from_utf8_lossy(&head);
                let line = text.lines().next().unwrap_or_default().to_owned();
                seen.lock().expect("lines lock").push(line);

                let response = format!(
                    "HTTP/1.1 {status} Scripted\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                socket
                    .write_all(response.as_bytes())
                    .await
                    .expect("write response");
                socket.shutdown().await.ok();
            }
        });
        Self {
            addr,
            request_lines,
        }
    }

    fn client(&self) -> CamplyClient {
        let config = ClientConfig::new(&format!("http://{}/api", self.addr)).expect("config");
        CamplyClient::new(config).expect("client")
    }

    fn request_lines(&self) -> Vec<String> {
        self.request_lines.lock().expect("lines lock").clone()
    }
}

#[rstest]
#[tokio::test]
async fn server_errors_are_retried_once() {
    let stub = Stub::start(vec![(503, UNAVAILABLE), (200, PROVIDERS)]).await;

    let providers = stub.client().providers().await.expect("second attempt succeeds");

    assert_eq!(providers.len(), 1);
    assert_eq!(providers[0].name, "RecreationDotGov");
    assert_eq!(stub.request_lines().len(), 2);
}

#[rstest]
#[tokio::test]
async fn persistent_server_errors_surface_payload() {
    let stub = Stub::start(vec![(503, UNAVAILABLE)]).await;

    let err = stub.client().providers().await.expect_err("keeps failing");

    assert_eq!(
        err,
        ClientError::Status {
            status: 503,
            code: Some("service_unavailable".to_owned()),
            message: "database unavailable".to_owned(),
            trace_id: Some("t-503".to_owned()),
        }
    );
    assert_eq!(stub.request_lines().len(), 2);
}

#[rstest]
#[tokio::test]
async fn not_found_is_not_retried() {
    let stub = Stub::start(vec![(
        404,
        r#"{"code":"not_found","message":"provider 9 not found"}"#,
    )])
    .await;

    let err = stub.client().provider(9).await.expect_err("missing");

    assert_eq!(
        err,
        ClientError::NotFound {
            path: "/api/provider/9".to_owned()
        }
    );
    assert_eq!(stub.request_lines(), vec!["GET /api/provider/9 HTTP/1.1"]);
}

#[rstest]
#[tokio::test]
async fn malformed_payloads_are_decode_errors() {
    let stub = Stub::start(vec![(200, r#"{"status":"up"}"#)]).await;

    let err = stub.client().health().await.expect_err("bad payload");

    assert!(matches!(err, ClientError::Decode { .. }), "{err:?}");
    assert_eq!(stub.request_lines().len(), 1);
}

#[rstest]
#[tokio::test]
async fn search_sends_trimmed_query_and_limit() {
    let stub = Stub::start(vec![(200, "[]")]).await;

    let rows = stub
        .client()
        .search("  upper pines ", Some(5))
        .await
        .expect("search");

    assert!(rows.is_empty());
    assert_eq!(
        stub.request_lines(),
        vec!["GET /api/search?query=upper+pines&limit=5 HTTP/1.1"]
    );
}

#[rstest]
#[tokio::test]
async fn nested_paths_are_built_from_segments() {
    let stub = Stub::start(vec![(200, "[]")]).await;

    let campgrounds = stub
        .client()
        .recreation_area_campgrounds(1, "2991")
        .await
        .expect("campgrounds");

    assert!(campgrounds.is_empty());
    assert_eq!(
        stub.request_lines(),
        vec!["GET /api/rec-area/1/2991/campgrounds HTTP/1.1"]
    );
}

#[rstest]
#[tokio::test]
async fn slow_responses_time_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let hold = tokio::spawn(async move {
        let mut sockets = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            sockets.push(socket);
        }
    });

    let config = ClientConfig::new(&format!("http://{addr}/api"))
        .expect("config")
        .with_timeout(Duration::from_millis(200))
        .with_max_retries(0);
    let err = CamplyClient::new(config)
        .expect("client")
        .health()
        .await
        .expect_err("times out");

    assert!(matches!(err, ClientError::Timeout { .. }), "{err:?}");
    hold.abort();
}

#[rstest]
#[tokio::test]
async fn refused_connections_are_transport_errors() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        listener.local_addr().expect("addr")
    };
    let config = ClientConfig::new(&format!("http://{addr}/api")).expect("config");

    let err = CamplyClient::new(config)
        .expect("client")
        .providers()
        .await
        .expect_err("nothing listening");

    assert!(matches!(err, ClientError::Transport { .. }), "{err:?}");
}
