//! In-process catalog source for tests.
//!
//! Serves a fixed response on 127.0.0.1 after an optional delay, one
//! connection at a time, each on its own task.

#![allow(dead_code)]

use std::time::Duration;

use fetch::CatalogClient;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const MOVIES_JSON: &str = r#"{
  "movies": [
    { "id": "nomadland", "title": "Nomadland", "category": "Best Picture", "photoUrL": "https://img/nomadland.jpg" },
    { "id": "minari", "title": "Minari", "category": "Best Picture", "photoUrL": "https://img/minari.jpg" },
    { "id": "chadwick-boseman", "title": "Ma Rainey's Black Bottom", "category": "Best Actor", "photoUrL": "https://img/chadwick.jpg" },
    { "id": "anthony-hopkins", "title": "The Father", "category": "Best Actor", "photoUrL": "https://img/hopkins.jpg" },
    { "id": "tenet", "title": "Tenet", "category": "Best Visual Effects", "photoUrL": "https://img/tenet.jpg" },
    { "id": "mulan", "title": "Mulan", "category": "Best Visual Effects", "photoUrL": "https://img/mulan.jpg" }
  ]
}"#;

/// Start a mock catalog source; returns its endpoint and server task
pub async fn start_mock_source(
    status: u16,
    body: &'static str,
    delay: Duration,
) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock catalog source");
    let addr = listener.local_addr().expect("Failed to get local address");

    let handle = tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                tokio::time::sleep(delay).await;

                let reason = if status == 200 { "OK" } else { "Error" };
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (format!("http://{}/data/30movies.json", addr), handle)
}

/// Endpoint on a port nothing listens on
pub async fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to get local address");
    drop(listener);
    format!("http://{}/data/30movies.json", addr)
}

/// Client that ignores proxy environment variables
pub fn local_client(endpoint: &str) -> CatalogClient {
    let http = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build HTTP client");
    CatalogClient::with_client(http, endpoint)
}
