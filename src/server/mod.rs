pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::Config,
    extract::Extractor,
    llm::OpenRouterClient,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/driver_licence", post(handlers::driver_licence))
        .route("/car_plate", post(handlers::car_plate))
        .route("/carte_gris", post(handlers::carte_gris))
        .fallback(handlers::not_found)
        // The body cap is enforced by the transport layer, not axum's default.
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(state.max_body_bytes))
        .layer(middleware::map_response_with_state(
            state.clone(),
            handlers::json_framework_errors,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let client = OpenRouterClient::new(&config.upstream);
    info!("Relaying to {}", client.endpoint());

    let app_state = AppState {
        extractor: Extractor::new(Arc::new(client), &config.upstream),
        max_body_bytes: config.server.max_body_bytes,
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!(
        max_body_mb = config.server.max_body_bytes / 1024 / 1024,
        model = %config.upstream.model,
        "Starting server on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix. If a handler cannot be installed
/// the server just keeps running.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }

    info!("Shutting down gracefully...");
}
