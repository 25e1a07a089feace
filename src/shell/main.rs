use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use person_directory::shared::infrastructure::person_store::in_memory::InMemoryPersonStore;
use person_directory::shell::config::AppConfig;
use person_directory::shell::http::router;
use person_directory::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // In-memory store for now; state resets on restart.
    let store = Arc::new(InMemoryPersonStore::seeded());
    let app = router(AppState::new(store));

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Person endpoint: http://{}/person", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
