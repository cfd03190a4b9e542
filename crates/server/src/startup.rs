use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, ServerConfig};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", server.host, server.port).parse()?)
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "cannot listen for ctrl_c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => { sig.recv().await; }
            Err(e) => {
                tracing::error!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!(event = "shutdown_signal", "shutdown signal received");
}

/// Public entry: open the pool, serve until a shutdown signal, then close the pool.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;

    let state = ServerState::from_db(db.clone());
    let app: Router = routes::build_router(state, build_cors());

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "listening on http://{}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    models::db::shutdown(db).await?;
    Ok(())
}
