use anyhow::Context;
use tracing_subscriber::{fmt, EnvFilter};

use airline_core::Database;
use airline_service::{build_router, config::Config, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).json().init();

    let cfg = Config::from_env()?;
    let db = Database::open(&cfg.db_path, &cfg.sqlite)
        .with_context(|| format!("failed to open store {:?}", cfg.db_path))?;
    let app = build_router(AppState::new(db));

    let addr = cfg.addr()?;
    tracing::info!(core_version=%airline_core::version(), addr=%addr, db=%cfg.db_path.display(), "starting airline-service");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr} failed"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    tracing::info!("airline-service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error=%e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
