use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{
    EnvFilter, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

use users_api::config::DbConfig;
use users_api::state::AppState;
use users_api::{db, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the filter and config read the environment.
    let dotenv_path = dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    match dotenv_path {
        Some(path) => tracing::info!(path = %path.display(), "loaded .env"),
        None => tracing::debug!("no .env file found"),
    }

    let config = DbConfig::from_env();
    let store = db::connect(&config).await?;

    let state = AppState {
        store: Arc::new(store),
    };
    let app = routes::create_router(state);

    let listener = TcpListener::bind("0.0.0.0:8000")
        .await
        .context("Failed to bind 0.0.0.0:8000")?;
    tracing::info!("Listening on 0.0.0.0:8000");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    tracing::info!("Shutdown signal received");
}
