use std::future::Future;

use axum::Router;
use configs::{AppConfig, ServerConfig};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router wired to `state`, with the same layers as production.
pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

/// Bind the configured address. Failure here is fatal for the process.
pub async fn bind(server: &ServerConfig) -> Result<TcpListener, StartupError> {
    let addr = server.bind_addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })
}

/// Serve `state` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: ServerState, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(StartupError::Serve)
}

async fn ctrl_c() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
    }
}

/// Public entry: load config, bind, and serve a fresh in-memory store until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::load_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;

    let listener = bind(&cfg.server).await?;
    let addr = listener.local_addr()?;
    info!(%addr, port = addr.port(), "Running on port");

    serve(listener, ServerState::in_memory(), ctrl_c()).await?;
    Ok(())
}
