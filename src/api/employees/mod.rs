//! Employee API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee router - every route here sits behind the session gate
/// middleware applied in [`crate::api::build_app`]
pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/employees",
            get(handler::list).post(handler::create),
        )
        .route(
            "/api/employees/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
