//! API routes
//!
//! # Structure
//!
//! - [`auth`] - login / logout / status (public)
//! - [`employees`] - roster CRUD (session-gated)
//! - [`health`] - health probe (public)
//!
//! Anything outside `/api/` falls through to the static frontend.

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::auth::require_admin;
use crate::core::ServerState;

pub mod auth;
pub mod employees;
pub mod health;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(auth::router())
        .merge(employees::router())
        .merge(health::router())
}

/// Build the fully configured application: routes, middleware, static
/// frontend fallback and state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // Static frontend - any non-API path
        .fallback_service(ServeDir::new(&state.config.static_dir))
        // CORS - handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Trace - request logging
        .layer(TraceLayer::new_for_http())
        // Session gate - outermost, runs before every route
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_admin,
        ))
        .with_state(state)
}
