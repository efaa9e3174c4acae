use thiserror::Error;

/// Server-level errors raised during startup and shutdown
///
/// Request-level failures use [`crate::utils::AppError`] instead; this
/// type only covers faults that abort the server itself (bind and serve
/// are the only fallible steps).
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for server lifecycle operations
pub type Result<T> = std::result::Result<T, ServerError>;
