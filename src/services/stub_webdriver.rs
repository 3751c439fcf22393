use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
};

/// Minimal in-process WebDriver endpoint for exercising session lifecycle
/// paths in tests. Session creation and deletion are counted; any command
/// whose path contains one of `fail_paths` gets a WebDriver error response,
/// everything else succeeds with an empty value.
pub struct StubWebdriver {
    url: String,
    sessions_opened: Arc<AtomicUsize>,
    sessions_closed: Arc<AtomicUsize>,
}

impl StubWebdriver {
    pub async fn spawn(fail_paths: &'static [&'static str]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let sessions_opened = Arc::new(AtomicUsize::new(0));
        let sessions_closed = Arc::new(AtomicUsize::new(0));

        let opened = sessions_opened.clone();
        let closed = sessions_closed.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let opened = opened.clone();
                let closed = closed.clone();
                tokio::spawn(async move {
                    serve_connection(stream, fail_paths, opened, closed).await;
                });
            }
        });

        StubWebdriver {
            url: format!("http://{}", addr),
            sessions_opened,
            sessions_closed,
        }
    }

    pub fn url(&self) -> String {
        self.url.clone()
    }

    pub fn sessions_opened(&self) -> usize {
        self.sessions_opened.load(Ordering::SeqCst)
    }

    pub fn sessions_closed(&self) -> usize {
        self.sessions_closed.load(Ordering::SeqCst)
    }
}

async fn serve_connection(
    mut stream: TcpStream,
    fail_paths: &[&str],
    opened: Arc<AtomicUsize>,
    closed: Arc<AtomicUsize>,
) {
    while let Some((method, path)) = read_request(&mut stream).await {
        let (status, body) = if method == "POST" && path == "/session" {
            opened.fetch_add(1, Ordering::SeqCst);
            (
                "200 OK",
                r#"{"value":{"sessionId":"stub-session","capabilities":{}}}"#,
            )
        } else if fail_paths.iter().any(|p| path.contains(p)) {
            (
                "500 Internal Server Error",
                r#"{"value":{"error":"unknown error","message":"stubbed command failure","stacktrace":""}}"#,
            )
        } else if method == "DELETE" && path == "/session/stub-session" {
            closed.fetch_add(1, Ordering::SeqCst);
            ("200 OK", r#"{"value":null}"#)
        } else {
            ("200 OK", r#"{"value":null}"#)
        };

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json; charset=utf-8\r\nContent-Length: {}\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        if stream.write_all(response.as_bytes()).await.is_err() {
            return;
        }
    }
}

/// Read one HTTP/1.1 request off the connection, draining its body, and
/// return the method and path. `None` when the peer hung up.
async fn read_request(stream: &mut TcpStream) -> Option<(String, String)> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.lines();
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let content_length = lines
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let total = header_end + 4 + content_length;
    while buf.len() < total {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    Some((method, path))
}
