//! Utility module - errors, logging and validation helpers
//!
//! - [`AppError`] - request-level error type
//! - [`AppResult`] - handler result alias
//! - [`logger`] - tracing setup
//! - [`validation`] - field validation helpers

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::AppError;
pub use result::AppResult;
