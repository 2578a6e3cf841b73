//! Streamable HTTP transport
//!
//! Serves the MCP endpoint at `/mcp` with axum and shuts down gracefully on
//! SIGINT or SIGTERM.

use crate::error::McpResult;
use crate::server::FilewrightServer;
use axum::Router;
use rmcp::transport::streamable_http_server::{
    StreamableHttpService, session::local::LocalSessionManager,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

/// Path the MCP endpoint is mounted on.
pub const MCP_PATH: &str = "/mcp";

/// Build the axum router serving `server` at [`MCP_PATH`].
pub fn router(server: FilewrightServer) -> Router {
    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );
    Router::new().nest_service(MCP_PATH, service)
}

/// Serve MCP over streamable HTTP on `bind` until a shutdown signal arrives.
pub async fn serve_http(server: FilewrightServer, bind: SocketAddr) -> McpResult<()> {
    let tools = server.registry().len();
    let listener = TcpListener::bind(bind).await?;

    info!(
        address = %listener.local_addr()?,
        path = MCP_PATH,
        tools,
        "Starting MCP server on streamable HTTP"
    );

    axum::serve(listener, router(server))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("MCP HTTP server stopped");
    Ok(())
}

/// Completes on SIGINT (Ctrl+C) or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        },
    }
}
