mod api_doc;
mod config;
mod error;
mod handlers;
mod item;
mod layers;
mod models;
mod routes;
mod state;
mod store;
#[cfg(test)]
mod test_utils;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;
use store::FileStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("inventory-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = FileStore::new(config.data_file.clone());
    if !store.exists().await {
        tracing::info!(
            "Data file {} does not exist yet, starting with an empty collection",
            store.path().display()
        );
    }

    let app = routes::app(AppState { store });

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {} (is the port already in use?)", addr))?;

    tracing::info!("Server running at: http://{}", addr);
    tracing::info!("API endpoints:");
    for (route, description) in routes::ENDPOINTS {
        tracing::info!("  {:<24} {}", route, description);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server closed successfully");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM; in-flight requests finish before exit
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
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

    tracing::info!("Shutdown signal received, shutting down gracefully...");
}
