//! datashelf-server: HTTP server for record management
//!
//! Serves an HTML listing page and form endpoints that map directly onto
//! single-row operations against a file-backed SQLite store.

pub mod db;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;
pub mod view;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use datashelf_core::ServerConfig;
pub use error::ApiError;
pub use state::AppState;

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::records::router())
        .merge(routes::health::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// Opens (creating if missing) the database file, ensures the schema
/// exists, then serves until Ctrl+C or SIGTERM.
pub async fn serve(config: ServerConfig) -> Result<(), ServeError> {
    let pool = db::create_pool(&config.database_path).await?;
    db::migrations::run(&pool).await?;

    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server startup error type
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
