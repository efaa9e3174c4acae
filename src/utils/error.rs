//! Unified request error handling
//!
//! Every failure a handler can produce maps onto one [`AppError`] variant,
//! which converts straight into an HTTP status plus a `{"message"}` body.
//!
//! | Variant | Status |
//! |---------|--------|
//! | Unauthorized | 401 |
//! | Validation | 400 |
//! | Invalid | 400 |
//! | NotFound | 404 |
//! | Conflict | 409 |
//!
//! # Example
//!
//! ```ignore
//! // In a handler
//! Err(AppError::not_found("Employee not found."))
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Error body returned to the client
///
/// The frontend surfaces `message` verbatim to the end user.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Session gate denied the request (401)
    #[error("Unauthorized: Admin not logged in.")]
    Unauthorized,

    /// Missing, wrong-type or malformed field (400)
    #[error("{0}")]
    Validation(String),

    /// Malformed request parameter, e.g. a non-integer id (400)
    #[error("{0}")]
    Invalid(String),

    /// No record with the given id (404)
    #[error("{0}")]
    NotFound(String),

    /// Duplicate email (409)
    #[error("{0}")]
    Conflict(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) | AppError::Invalid(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
        };

        let body = Json(ErrorBody {
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_maps_to_its_status() {
        let cases = [
            (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
            (AppError::validation("v"), StatusCode::BAD_REQUEST),
            (AppError::invalid("i"), StatusCode::BAD_REQUEST),
            (AppError::not_found("n"), StatusCode::NOT_FOUND),
            (AppError::conflict("c"), StatusCode::CONFLICT),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
