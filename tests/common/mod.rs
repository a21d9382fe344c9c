//! In-process HTTP stub that records every request it receives.
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub uri: Uri,
    pub body: Bytes,
}

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: &'static str,
    seen: Arc<Mutex<Vec<Recorded>>>,
}

pub struct StubServer {
    pub base_url: String,
    seen: Arc<Mutex<Vec<Recorded>>>,
}

impl StubServer {
    /// Answers every request with `status` and the JSON `body`.
    pub async fn start(status: StatusCode, body: &'static str) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new().fallback(record).with_state(Canned {
            status,
            body,
            seen: seen.clone(),
        });

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub listener");
        let addr = listener.local_addr().expect("stub listener address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self {
            base_url: format!("http://{addr}"),
            seen,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.seen.lock().expect("stub lock poisoned").clone()
    }
}

async fn record(
    State(canned): State<Canned>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
    canned
        .seen
        .lock()
        .expect("stub lock poisoned")
        .push(Recorded { method, uri, body });
    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
}
