//! llamagate-rest – entry point.
//!
//! Startup order:
//! 1. Resolve configuration (defaults → config file → environment).
//! 2. Initialise structured tracing.
//! 3. Build the upstream client and shared state.
//! 4. Build the Axum router and start the HTTP server with graceful shutdown.

mod doc;
mod error;
mod middleware;
mod routes;
mod schemas;
mod state;

use std::sync::Arc;

use tracing::{info, warn};

use llamagate_client::{Client, Config};

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = Config::load();

    init_tracing();

    info!(version = env!("CARGO_PKG_VERSION"), "llamagate-rest starting");

    let state = Arc::new(AppState {
        client: Client::new(cfg.ollama_host.clone()),
        config: Arc::new(cfg.clone()),
    });

    let app = routes::build(Arc::clone(&state));
    let addr = cfg.rest.to_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, upstream = %cfg.ollama_host, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("llamagate-rest stopped");
    Ok(())
}

/// Filter comes from `RUST_LOG` when set, otherwise `info`. Set
/// `LLAMAGATE_LOG_JSON=1` for newline-delimited JSON records.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);

    let log_json = std::env::var("LLAMAGATE_LOG_JSON")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Returns a future that resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install CTRL+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received; starting graceful shutdown");
}
