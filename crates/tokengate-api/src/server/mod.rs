//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use tokengate_common::{AppConfig, AppError, TokenService};
use tokengate_service::{default_seed, InMemoryIdentityRepository, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_middleware(
        create_router(),
        &config.api,
        &config.cors,
        config.app.env.is_production(),
    );
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Loading seed identities...");
    let identity_repo = Arc::new(InMemoryIdentityRepository::from_seed(default_seed())?);

    let token_service = Arc::new(TokenService::new(&config.jwt.secret, config.jwt.token_expiry));

    let service_context = ServiceContextBuilder::new()
        .identity_repo(identity_repo)
        .token_service(token_service)
        .build()?;

    Ok(AppState::new(service_context, config))
}

/// Serve the application on an already bound listener until Ctrl-C
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), AppError> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let host = config.api.host.clone();
    let port = config.api.port;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    info!("Starting HTTP server on {}:{}", host, port);
    let listener = TcpListener::bind((host.as_str(), port))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to bind to {host}:{port}: {e}")))?;

    serve(listener, app).await
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
