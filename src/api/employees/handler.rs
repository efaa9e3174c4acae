//! Employee API Handlers
//!
//! CRUD over the in-memory roster. Field validation runs before the
//! existence check on update, so invalid data against a missing id
//! reports 400 rather than 404.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use serde_json::Value;

use crate::core::ServerState;
use crate::store::{Employee, EmployeeDraft};
use crate::utils::{AppError, AppResult};

/// Delete response body
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// Parse a path id; anything that is not integer-formatted is a 400
fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse()
        .map_err(|_| AppError::invalid("Invalid employee ID format."))
}

/// List all employees in storage order
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    Ok(Json(state.store.list()))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let id = parse_id(&id)?;
    let employee = state
        .store
        .get(id)
        .ok_or_else(|| AppError::not_found("Employee not found."))?;
    Ok(Json(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<Value>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let draft = EmployeeDraft::from_json(&payload)?;
    let employee = state.store.create(draft)?;

    tracing::info!(id = employee.id, email = %employee.email, "Employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Update an employee, replacing all fields except the id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> AppResult<Json<Employee>> {
    let id = parse_id(&id)?;
    // Fields are validated before the record is looked up
    let draft = EmployeeDraft::from_json(&payload)?;
    let employee = state.store.update(id, draft)?;

    tracing::info!(id = employee.id, "Employee updated");
    Ok(Json(employee))
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let id = parse_id(&id)?;
    state.store.delete(id)?;

    tracing::info!(id, "Employee deleted");
    Ok(Json(DeleteResponse {
        message: "Employee deleted successfully.",
    }))
}
