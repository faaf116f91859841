//! HTTP surface
//!
//! Two routes, `POST /analyse` and `POST /lemmatize`. The analyzer is
//! loaded before the listener binds and handed to every handler through
//! [`AppState`].

pub mod error;
pub mod handlers;

use crate::config::ServerConfig;
use crate::error::CliError;
use axum::extract::{DefaultBodyLimit, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::post;
use axum::Router;
use slovo_core::Analyzer;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;

pub use error::{ApiError, ErrorBody};

/// Shared, read-only state of the service
#[derive(Clone, Debug)]
pub struct AppState {
    /// Analyzer wrapping the loaded pipeline
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    /// Wrap an analyzer for sharing across requests
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}

/// Build the application router
pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/analyse", post(handlers::analyse))
        .route("/lemmatize", post(handlers::lemmatize))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    log::info!(
        "{method} {path} -> {} in {:?}",
        response.status().as_u16(),
        start.elapsed()
    );
    response
}

/// Bind the listener and serve until Ctrl-C or SIGTERM
pub async fn serve(config: &ServerConfig, analyzer: Analyzer) -> Result<(), CliError> {
    let addr = config.addr();
    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|source| CliError::BindError {
            addr: addr.clone(),
            source,
        })?;

    let local = listener
        .local_addr()
        .map(|a| a.to_string())
        .unwrap_or(addr);
    log::info!(
        "Serving {} pipeline on http://{local} (lemma spacing: {:?})",
        analyzer.pipeline_name(),
        analyzer.options().lemma_spacing
    );

    let app = router(AppState::new(analyzer), config.max_body_bytes);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(CliError::ServeError)?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                log::warn!("Failed to listen for SIGTERM: {e}");
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

    log::info!("Shutdown signal received");
}
