//! HTTP surface of the relay
//!
//! | Route                   | Behavior                                   |
//! |-------------------------|--------------------------------------------|
//! | `GET /health`           | `{"status":"ok"}`                          |
//! | `POST /api/generate`    | relay `{prompt}` through model and devices |
//! | `POST /tools/smart_home`| run one call descriptor directly           |
//! | other `GET`             | static dashboard files                     |

pub mod handlers;
pub mod static_files;

use axum::{
    Router,
    routing::{get, post},
};
use relay_application::{DeviceApi, ModelGateway, RelayPromptUseCase, ToolExecutor};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared state behind every handler
pub struct RelayState<D: DeviceApi, M: ModelGateway> {
    pub relay: RelayPromptUseCase<D, M>,
    pub executor: ToolExecutor<D>,
    pub static_dir: PathBuf,
}

impl<D: DeviceApi, M: ModelGateway> RelayState<D, M> {
    pub fn new(
        relay: RelayPromptUseCase<D, M>,
        executor: ToolExecutor<D>,
        static_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            relay,
            executor,
            static_dir: static_dir.into(),
        }
    }
}

/// Build the relay router
pub fn create_router<D, M>(state: RelayState<D, M>) -> Router
where
    D: DeviceApi + 'static,
    M: ModelGateway + 'static,
{
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/generate",
            post(handlers::generate::<D, M>).fallback(handlers::fallback::<D, M>),
        )
        .route(
            "/tools/smart_home",
            post(handlers::smart_home::<D, M>).fallback(handlers::fallback::<D, M>),
        )
        .fallback(handlers::fallback::<D, M>)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(Arc::new(state))
}

/// Serve `router` on `address` until Ctrl-C or SIGTERM
pub async fn serve(router: Router, address: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("Starting relay on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Relay shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for CTRL-C: {}", e);
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
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received CTRL-C signal, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM signal, shutting down"),
    }
}
