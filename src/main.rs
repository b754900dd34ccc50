//! Server binary: reads settings, opens the SQLite store (creating file and table if needed), serves the API.

use newsletter_api::{app, connect_pool, ensure_database_exists, telemetry, AppState, Settings, SqliteNewsletterStore};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;
    telemetry::init_tracing(&settings.log_filter);

    ensure_database_exists(&settings.database_url).await?;
    let pool = connect_pool(&settings.database_url, settings.max_connections).await?;
    let store = SqliteNewsletterStore::open(pool).await?;
    let state = AppState::new(store);

    let router = app(state, settings.body_limit_bytes);
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
