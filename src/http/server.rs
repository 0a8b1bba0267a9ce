//! Router assembly and the listening loop.
//!
//! `/api` routes and `/info` are always present. When a static directory is
//! configured, every other path is answered from it, with unknown paths
//! falling back to the client's `index.html`.

use std::path::Path;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::handlers;
use super::state::AppState;

/// The HTTP server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Creates a server over the seeded directory.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_state(config, Arc::new(AppState::seeded()))
    }

    pub fn with_state(config: ServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    pub fn router(&self) -> Router {
        router(self.state.clone(), self.config.static_dir.as_deref())
    }

    /// Binds and serves until Ctrl+C or SIGTERM.
    pub async fn run(self) -> anyhow::Result<()> {
        let router = self.router();
        let addr = self.config.addr();

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server running on port {}", self.config.port);
        if let Some(dir) = &self.config.static_dir {
            tracing::info!(dir = %dir.display(), "Serving client build");
        }

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

/// Builds the application router.
pub fn router(state: Arc<AppState>, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route(
            "/persons",
            get(handlers::list_persons).post(handlers::create_person),
        )
        .route(
            "/persons/",
            get(handlers::list_persons).post(handlers::create_person),
        )
        .route(
            "/persons/{id}",
            get(handlers::get_person).delete(handlers::delete_person),
        )
        .fallback(handlers::not_found);

    let mut router = Router::new()
        .nest("/api", api)
        .route("/info", get(handlers::info))
        .with_state(state);

    if let Some(dir) = static_dir {
        let client = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
        router = router.fallback_service(client);
    }

    router.layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
