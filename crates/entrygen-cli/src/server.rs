//! Static file server.
//!
//! Serves a directory as-is: no routing beyond file lookup.

use std::future::Future;
use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::debug;

use crate::error::{CliError, Result};
use crate::ui;

pub fn router(root: impl AsRef<Path>) -> Router {
    Router::new().fallback_service(ServeDir::new(root.as_ref()))
}

/// Serve `root` on `127.0.0.1:<port>` until Ctrl+C.
pub async fn serve(root: &Path, port: u16) -> Result<()> {
    let addr: SocketAddr = ([127, 0, 0, 1], port).into();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| CliError::Server(format!("failed to bind {}: {}", addr, e)))?;

    ui::info(&format!(
        "Server {} listening on port {} http://localhost:{}/",
        project_name(),
        port,
        port
    ));

    serve_listener(listener, root, shutdown_signal()).await
}

/// Serve `root` on an already bound listener until `shutdown` resolves.
pub async fn serve_listener<F>(listener: TcpListener, root: &Path, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    debug!("Serving files from {}", root.display());
    axum::serve(listener, router(root))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| CliError::Server(e.to_string()))
}

fn project_name() -> String {
    std::env::current_dir()
        .ok()
        .and_then(|dir| dir.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_default()
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        ui::info("Shutting down");
    }
}
