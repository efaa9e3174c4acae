//! Roster Server - single-admin employee management panel
//!
//! # Architecture
//!
//! A small axum service with two moving parts:
//!
//! - **Session gate** (`auth`): one process-wide logged-in flag, set by
//!   login/logout and checked by middleware before every employee route
//! - **Record store** (`store`): in-memory employee list with a strictly
//!   increasing id counter
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/          # configuration, state, server
//! ├── auth/          # session gate, admin middleware
//! ├── store/         # in-memory employee store
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod store;
pub mod utils;

// Re-export common types
pub use auth::SessionGate;
pub use core::{Config, Server, ServerState};
pub use store::{Employee, EmployeeDraft, EmployeeStore, StoreError};
pub use utils::{AppError, AppResult};

pub use utils::logger::init_logger;

/// Load `.env` and initialize logging. Call once, before anything logs.
pub fn setup_environment() {
    dotenv::dotenv().ok();
    init_logger();
}

pub fn print_banner() {
    println!(
        r#"
    ____             __
   / __ \____  _____/ /____  _____
  / /_/ / __ \/ ___/ __/ _ \/ ___/
 / _, _/ /_/ (__  ) /_/  __/ /
/_/ |_|\____/____/\__/\___/_/
    "#
    );
}
