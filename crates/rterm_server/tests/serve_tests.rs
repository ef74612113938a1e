//! Server round trips over a real socket.

use std::sync::Arc;

use rterm_builtins::RegistryProfile;
use rterm_server::{router, serve_on, AppState, Sessions, SessionMode};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

struct TestServer {
    addr: std::net::SocketAddr,
    stop: Option<oneshot::Sender<()>>,
    _root: TempDir,
}

impl TestServer {
    async fn start() -> Self {
        let root = TempDir::new().unwrap();
        let sessions = Sessions::new(SessionMode::Shared, RegistryProfile::Core, root.path(), 4).unwrap();
        let app = router(
            Arc::new(AppState::new(sessions)),
            &["http://localhost:3000".to_string()],
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop, stopped) = oneshot::channel::<()>();
        tokio::spawn(serve_on(listener, app, async {
            let _ = stopped.await;
        }));

        Self {
            addr,
            stop: Some(stop),
            _root: root,
        }
    }

    async fn send(&self, request: &str) -> String {
        let mut stream = TcpStream::connect(self.addr).await.unwrap();
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).await.unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}

#[tokio::test]
async fn execute_over_http() {
    let server = TestServer::start().await;
    let body = r#"{"command":"echo hello world"}"#;
    let request = format!(
        "POST /execute HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let response = server.send(&request).await;
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.ends_with(r#"{"output":"hello world"}"#), "{response}");
}

#[tokio::test]
async fn health_over_http() {
    let server = TestServer::start().await;
    let response = server
        .send("GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await;
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.contains(r#""status":"ok""#), "{response}");
}

#[tokio::test]
async fn cors_allows_configured_origin_only() {
    let server = TestServer::start().await;
    let allowed = server
        .send(
            "GET /autocomplete?prefix=ec HTTP/1.1\r\nHost: localhost\r\nOrigin: http://localhost:3000\r\nConnection: close\r\n\r\n",
        )
        .await
        .to_ascii_lowercase();
    assert!(allowed.contains("access-control-allow-origin: http://localhost:3000"), "{allowed}");
    assert!(allowed.contains(r#"{"suggestions":["echo"]}"#), "{allowed}");

    let denied = server
        .send(
            "GET /autocomplete?prefix=ec HTTP/1.1\r\nHost: localhost\r\nOrigin: http://evil.example\r\nConnection: close\r\n\r\n",
        )
        .await
        .to_ascii_lowercase();
    assert!(!denied.contains("access-control-allow-origin"), "{denied}");
}
