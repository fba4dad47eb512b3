//! llamagate-tools – WebSocket tool adapter.
//!
//! Exposes the client operations as a small JSON action protocol over a
//! WebSocket connection. On connect the server advertises its tool
//! catalog; each inbound `{action, id, ...}` frame is answered with
//! `{id, result}` or `{id, error}`. Protocol errors never close the
//! connection.

mod catalog;
mod handler;
mod proto;

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tracing::{debug, info, warn};

use llamagate_client::{Client, Config};

/// State shared across all tool connections.
#[derive(Clone, Debug)]
pub struct AppState {
    pub client: Client,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = Config::load();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!(version = env!("CARGO_PKG_VERSION"), "llamagate-tools starting");

    let state = AppState {
        client: Client::new(cfg.ollama_host.clone()),
        config: Arc::new(cfg.clone()),
    };

    let app = Router::new()
        .route("/ws", get(ws_upgrade))
        .with_state(state);

    let addr = cfg.tools.to_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, upstream = %cfg.ollama_host, "tool adapter listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("llamagate-tools stopped");
    Ok(())
}

async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Serve one connection: push the tool catalog, then answer frames
/// until the peer closes.
async fn handle_socket(mut socket: WebSocket, state: AppState) {
    let hello = serde_json::json!({
        "type": "tools",
        "tools": catalog::tool_catalog(),
    });
    if let Err(e) = socket.send(Message::text(hello.to_string())).await {
        warn!(error = %e, "failed to send tool catalog");
        return;
    }

    while let Some(msg) = socket.recv().await {
        let msg = match msg {
            Ok(msg) => msg,
            Err(e) => {
                debug!(error = %e, "connection error; dropping socket");
                break;
            }
        };

        match msg {
            Message::Text(text) => {
                let reply = handler::handle_frame(&state, text.as_str()).await;
                if socket.send(Message::text(reply.to_string())).await.is_err() {
                    break;
                }
            }
            Message::Close(_) => break,
            // Ping/pong are answered by the protocol layer; binary
            // frames have no meaning in this protocol.
            _ => {}
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to install CTRL+C signal handler");
    }
    info!("shutdown signal received");
}
