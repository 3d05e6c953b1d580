//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Mutex, MutexGuard};

use colorteller::config::env;
use colorteller::{Config, HttpServer};
use tokio::net::TcpListener;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serialize tests that touch the process environment.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Remove every variable the service reads.
pub fn clear_env() {
    for var in [
        env::SERVER_PORT_VAR,
        env::COLOR_VAR,
        env::STAGE_VAR,
        env::XRAY_TRACING_VAR,
    ] {
        std::env::remove_var(var);
    }
}

/// Spawn the server on an ephemeral local port and return its address.
pub async fn spawn_server(config: Config) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}
