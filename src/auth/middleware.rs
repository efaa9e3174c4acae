//! Authentication middleware
//!
//! Checks the session gate before any employee route runs.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::core::ServerState;
use crate::utils::AppError;

/// Admin middleware - requires an open session
///
/// # Paths that skip the gate
///
/// - `OPTIONS *` (CORS preflight)
/// - non-`/api/` paths (static frontend)
/// - `/api/auth/*` (login/logout/status must work while logged out)
/// - `/api/health`
///
/// Everything else is denied with 401 until the admin logs in.
pub async fn require_admin(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // Allow CORS preflight OPTIONS requests
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Non-API routes skip the gate (static files, 404s)
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    // Public API routes skip the gate
    let is_public_api_route = path.starts_with("/api/auth/") || path == "/api/health";
    if is_public_api_route {
        return Ok(next.run(req).await);
    }

    if let Err(e) = state.session.guard() {
        tracing::warn!(path = %path, "Rejected request without an open admin session");
        return Err(e);
    }

    Ok(next.run(req).await)
}
