use std::{env, future::Future, net::SocketAddr};

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{routes, state::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `config.toml` (or `CONFIG_PATH`); fall back to environment variables
/// when the file is missing or invalid.
pub fn load_config() -> AppConfig {
    match AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "config file unavailable; using environment");
            config_from_env()
        }
    }
}

fn config_from_env() -> AppConfig {
    let mut cfg = AppConfig::default();
    if let Ok(host) = env::var("SERVER_HOST") {
        cfg.server.host = host;
    }
    cfg.server.port = env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8081);
    cfg.server.worker_threads = env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok());
    cfg.server.strict_not_found = env::var("STRICT_NOT_FOUND").map(|v| v == "true" || v == "1").unwrap_or(false);
    cfg.database.url = models::db::DATABASE_URL.clone();
    cfg
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Connect, migrate and assemble the router for `cfg`.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::migrate(&db).await?;
    let state = ServerState::new(db, cfg.server.strict_not_found);
    Ok(routes::build_router(state, build_cors()))
}

/// Serve `app` until `shutdown` resolves; in-flight requests are drained first.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "ctrl_c listener failed; shutting down");
        return;
    }
    info!("received Ctrl+C, draining connections");
}

/// Build the app for `cfg` and serve it until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    info!(%addr, strict_not_found = cfg.server.strict_not_found, "starting flight records server");
    let listener = TcpListener::bind(addr).await?;
    serve(listener, app, ctrl_c()).await
}
