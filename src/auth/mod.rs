//! Authentication - the session gate and its middleware
//!
//! The entire authorization model is one process-wide boolean: logging in
//! from anywhere authorizes every caller, logging out deauthorizes every
//! caller. No tokens, no per-user identity, no expiry.

pub mod middleware;
pub mod session;

pub use middleware::require_admin;
pub use session::SessionGate;
