use std::time::{Duration, Instant};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc::unbounded_channel;

use parkview::app::{App, SpotStatus};
use parkview::errors::FetchError;
use parkview::fetch::StatusClient;
use parkview::runner::event_loop_main::{spawn_cycle, CycleResult};

/// Client that ignores any proxy configured in the environment.
fn local_client(url: String) -> StatusClient {
    let client = reqwest::Client::builder().no_proxy().build().expect("reqwest client");
    StatusClient::with_client(client, url)
}

/// Serve exactly one HTTP response on an ephemeral port and return the URL.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.expect("accept");
        let mut buf = [0u8; 4096];
        let _ = sock.read(&mut buf).await;
        let resp = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        sock.write_all(resp.as_bytes()).await.expect("write");
        let _ = sock.shutdown().await;
    });
    format!("http://{}/api/status", addr)
}

/// Accept one connection and never answer it.
async fn serve_hung() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let (_sock, _) = listener.accept().await.expect("accept");
        tokio::time::sleep(Duration::from_secs(60)).await;
    });
    format!("http://{}/api/status", addr)
}

#[tokio::test]
async fn fetches_and_decodes_snapshot() {
    let url = serve_once("200 OK", r#"{"spots":{"3,2":{"status":"OCCUPIED"}},"closest_free":"0,0","free_count":49}"#).await;
    let client = local_client(url);
    let snap = client.fetch_snapshot().await.expect("snapshot");
    assert_eq!(snap.free_count, Some(49));
    assert_eq!(snap.closest_free.as_deref(), Some("0,0"));
    assert!(snap.spots.contains_key("3,2"));
}

#[tokio::test]
async fn server_error_status_is_reported() {
    let url = serve_once("503 Service Unavailable", "{}").await;
    let client = local_client(url);
    let err = client.fetch_snapshot().await.unwrap_err();
    assert!(matches!(err, FetchError::Status(503)), "got {err:?}");
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let url = serve_once("200 OK", "<html>maintenance</html>").await;
    let client = local_client(url);
    let err = client.fetch_snapshot().await.unwrap_err();
    assert!(matches!(err, FetchError::Malformed(_)), "got {err:?}");
}

#[tokio::test]
async fn refused_connection_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let client = local_client(format!("http://{}/api/status", addr));
    let err = client.fetch_snapshot().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn spawned_cycle_feeds_the_app() {
    let url = serve_once("200 OK", r#"{"spots":{"0,1":{"state":"waiting"}},"free_count":49}"#).await;
    let client = local_client(url);
    let (tx, mut rx) = unbounded_channel::<CycleResult>();

    spawn_cycle(&client, &tx);
    let result = rx.recv().await.expect("cycle result");

    let mut app = App::default();
    app.apply_cycle(result, Instant::now());
    assert_eq!(app.cycles_applied, 1);
    assert_eq!(app.grid.tile(0, 1).map(|t| t.status), Some(SpotStatus::Waiting));
}

#[tokio::test]
async fn hung_fetch_does_not_block_later_cycles() {
    let hung = local_client(serve_hung().await);
    let ok = local_client(serve_once("200 OK", r#"{"free_count":7}"#).await);
    let (tx, mut rx) = unbounded_channel::<CycleResult>();

    spawn_cycle(&hung, &tx);
    spawn_cycle(&ok, &tx);

    let first = tokio::time::timeout(Duration::from_secs(10), rx.recv())
        .await
        .expect("a cycle should complete")
        .expect("channel open");
    assert_eq!(first.expect("snapshot").free_count, Some(7));
}
