//! Router construction and server lifecycle.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use super::routes::{ask_handler, health_handler};
use crate::domain::DomainError;
use crate::ports::{ChatbotPort, FaqStorePort};

/// Shared handler state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub chatbot: Arc<dyn ChatbotPort>,
    pub store: Arc<dyn FaqStorePort>,
}

/// Build the router. The chatbot endpoint is public; no session is read.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/chatbot/ask", post(ask_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `address` and serve until Ctrl+C or SIGTERM.
pub async fn serve(address: &str, router: Router) -> Result<(), DomainError> {
    info!("Binding to {address}");
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| DomainError::Config(format!("bind {address}: {e}")))?;
    info!("Server running on {address}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| DomainError::Config(format!("server error: {e}")))?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
        } else {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
