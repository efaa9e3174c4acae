//! Authentication Handlers
//!
//! Login, logout and status checks against the process-wide session gate.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;

/// Login request body
///
/// Fields default to empty so an incomplete body fails credential
/// comparison rather than deserialization.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login / logout response body
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Session status response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub is_logged_in: bool,
}

/// Login handler
///
/// A match opens the process-wide session; a mismatch closes it even if
/// it was open, and answers 401.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> (StatusCode, Json<AuthResponse>) {
    if state.session.login(&req.username, &req.password) {
        tracing::info!("Admin logged in successfully");
        (
            StatusCode::OK,
            Json(AuthResponse {
                success: true,
                message: "Login successful",
            }),
        )
    } else {
        tracing::warn!(username = %req.username, "Admin login failed");
        (
            StatusCode::UNAUTHORIZED,
            Json(AuthResponse {
                success: false,
                message: "Invalid credentials",
            }),
        )
    }
}

/// Logout handler - always succeeds
pub async fn logout(State(state): State<ServerState>) -> Json<AuthResponse> {
    state.session.logout();
    tracing::info!("Admin logged out");
    Json(AuthResponse {
        success: true,
        message: "Logout successful",
    })
}

/// Session status - lets the frontend check login state on page load
pub async fn status(State(state): State<ServerState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        is_logged_in: state.session.is_logged_in(),
    })
}
