//! Application startup and lifecycle management.

use crate::config::RelayConfig;
use crate::handlers::{create_chat_completion, health_check, metrics_endpoint, readiness_check};
use crate::services::providers::openrouter::{OpenRouterConfig, OpenRouterProvider};
use crate::services::CompletionProvider;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics::metrics_middleware, tracing::request_id_middleware};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: RelayConfig,
    pub provider: Arc<dyn CompletionProvider>,
}

/// Build the HTTP router with all middleware applied.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(create_chat_completion))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics_endpoint))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");

                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                })
                // Provider failures are logged once by the handler.
                .on_failure(()),
        )
        // Any origin, method and header; credentials allowed.
        .layer(CorsLayer::very_permissive())
        // Outermost, so preflight responses get an id too.
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Wait for Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application against the real OpenRouter backend.
    pub async fn build(config: RelayConfig) -> Result<Self, AppError> {
        let provider = OpenRouterProvider::new(OpenRouterConfig {
            api_key: config.openrouter.api_key.clone(),
            base_url: config.openrouter.base_url.clone(),
            timeout: config.openrouter.timeout(),
        })
        .map_err(|e| AppError::ConfigError(anyhow::anyhow!(e)))?;

        tracing::info!(
            base_url = %config.openrouter.base_url,
            default_model = %config.default_model,
            "Initialized OpenRouter provider"
        );

        Self::build_with_provider(config, Arc::new(provider)).await
    }

    /// Build the application with an explicit provider (used by tests).
    pub async fn build_with_provider(
        config: RelayConfig,
        provider: Arc<dyn CompletionProvider>,
    ) -> Result<Self, AppError> {
        // port 0 = random port for testing
        let address = config.common.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Debug relay service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state: AppState { config, provider },
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}
