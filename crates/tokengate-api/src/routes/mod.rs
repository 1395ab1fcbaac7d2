//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, health, protected};
use crate::state::AppState;

/// Create the router with every route
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(protected_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(auth::login))
}

/// Routes that require a valid token
fn protected_routes() -> Router<AppState> {
    Router::new().route("/protected/data", get(protected::get_data))
}
