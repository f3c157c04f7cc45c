use std::sync::Arc;

use anyhow::Context;
use taskapp_server::{
    app_state::{AppState, SharedState},
    map_routes,
    settings::Settings,
    DataContext, MemoryStore,
};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── Settings ───────────────────────────────────────────────
    let settings = Settings::load().context("Failed to load settings")?;
    let addr = settings.socket_addr()?;

    // ── Store ──────────────────────────────────────────────────
    let state: SharedState = if settings.uses_memory_store() {
        tracing::warn!("using in-memory task store, nothing will be persisted");
        Arc::new(AppState::new(MemoryStore::new()))
    } else {
        let store = DataContext::new(&settings.database_path)
            .with_context(|| format!("Failed to open database {}", settings.database_path))?;
        tracing::info!(path = %settings.database_path, "task store opened");
        Arc::new(AppState::new(store))
    };

    // ── Start ──────────────────────────────────────────────────
    let app = map_routes(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server running on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
