//! In-process mock upstream used by the integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;

/// Bodies recorded per endpoint, in arrival order.
#[derive(Clone, Default)]
pub struct Recorded {
    inner: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl Recorded {
    pub fn push(&self, body: serde_json::Value) {
        self.inner.lock().unwrap().push(body);
    }

    pub fn take(&self) -> Vec<serde_json::Value> {
        self.inner.lock().unwrap().clone()
    }
}

/// Bind the router on an ephemeral local port and serve it in the
/// background for the duration of the test.
pub async fn spawn_server(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// An address nothing is listening on: bind an ephemeral port, then
/// drop the listener before handing the address out.
pub async fn unreachable_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}
