use std::{net::SocketAddr, time::Duration};

use axum::{Json, Router, http::StatusCode, routing::get};
use reqwest::Url;
use serde_json::{Value, json};
use tokio::{
    io::AsyncReadExt,
    net::TcpListener,
    sync::oneshot,
    task::JoinHandle,
};

/// An in-process HTTP server serving fixture directory documents.
pub struct FixtureServer {
    addr: SocketAddr,
    task: JoinHandle<()>,
}

impl FixtureServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fixture listener");
        let addr = listener.local_addr().expect("fixture address");
        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, fixture_router()).await;
        });
        Self { addr, task }
    }

    pub fn url(&self, path: &str) -> Url {
        Url::parse(&format!("http://{}{}", self.addr, path)).expect("fixture url")
    }
}

impl Drop for FixtureServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// An endpoint that reads the request and never answers. `received` fires
/// once the request has arrived, `closed` once the client hangs up.
pub struct HangingEndpoint {
    pub url: Url,
    pub received: oneshot::Receiver<()>,
    pub closed: oneshot::Receiver<()>,
    task: JoinHandle<()>,
}

impl HangingEndpoint {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind hanging listener");
        let addr = listener.local_addr().expect("hanging address");
        let (received_tx, received) = oneshot::channel();
        let (closed_tx, closed) = oneshot::channel();
        let task = tokio::spawn(async move {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            let mut received_tx = Some(received_tx);
            loop {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        request.extend_from_slice(&buf[..n]);
                        if request.windows(4).any(|w| w == b"\r\n\r\n") {
                            if let Some(tx) = received_tx.take() {
                                let _ = tx.send(());
                            }
                        }
                    }
                }
            }
            let _ = closed_tx.send(());
        });
        let url = Url::parse(&format!("http://{addr}/index.json")).expect("hanging url");
        Self {
            url,
            received,
            closed,
            task,
        }
    }
}

impl Drop for HangingEndpoint {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub fn sample_document() -> Value {
    json!({
        "employees": [
            {
                "id": 1,
                "name": "Ann",
                "designation": "Engineer",
                "skills": ["Python", "SQL"],
                "projects": [
                    {
                        "name": "Inventory",
                        "description": "Stock tracking",
                        "team": [{ "name": "Bo", "role": "Designer" }],
                        "tasks": [{ "id": 11, "name": "Schema", "status": "done" }]
                    }
                ]
            },
            {
                "id": 2,
                "name": "Bo",
                "designation": "Designer",
                "skills": ["Photoshop"]
            }
        ]
    })
}

fn fixture_router() -> Router {
    Router::new()
        .route("/index.json", get(|| async { Json(sample_document()) }))
        .route(
            "/no-employees.json",
            get(|| async { Json(json!({ "company": "Acme" })) }),
        )
        .route("/array.json", get(|| async { Json(json!([])) }))
        .route("/broken.json", get(|| async { "{\"employees\": [" }))
        .route(
            "/unavailable.json",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "try later") }),
        )
        .route(
            "/slow.json",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Json(sample_document())
            }),
        )
}
