use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::middleware::audit;
use crate::models::{Employee, EmployeeWithTeams};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct UpdateEmployee {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<EmployeeWithTeams>>, AppError> {
    let employees = db::employees::list(&state.pool, auth.organisation_id()).await?;
    Ok(Json(employees))
}

pub async fn get(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<EmployeeWithTeams>, AppError> {
    let employee = db::employees::find_with_teams(&state.pool, id, auth.organisation_id())
        .await?
        .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;
    Ok(Json(employee))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<CreateEmployee>,
) -> Result<(StatusCode, Json<Employee>), AppError> {
    let employee = db::employees::create(
        &state.pool,
        auth.organisation_id(),
        &req.first_name,
        &req.last_name,
        req.email.as_deref(),
        req.phone.as_deref(),
    )
    .await?;

    audit::log_action(
        &state.pool,
        auth.organisation_id(),
        auth.user_id,
        "EMPLOYEE_CREATED",
        format!(
            "Employee '{} {}' created.",
            employee.first_name, employee.last_name
        ),
    )
    .await;

    Ok((StatusCode::CREATED, Json(employee)))
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateEmployee>,
) -> Result<Json<Employee>, AppError> {
    let employee = db::employees::update(
        &state.pool,
        id,
        auth.organisation_id(),
        req.first_name.as_deref(),
        req.last_name.as_deref(),
        req.email.as_deref(),
        req.phone.as_deref(),
    )
    .await?
    .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;

    audit::log_action(
        &state.pool,
        auth.organisation_id(),
        auth.user_id,
        "EMPLOYEE_UPDATED",
        format!(
            "Employee '{} {}' updated.",
            employee.first_name, employee.last_name
        ),
    )
    .await;

    Ok(Json(employee))
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    // Display name is captured before the row goes away.
    let existing = db::employees::find_by_id(&state.pool, id, auth.organisation_id())
        .await?
        .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;

    db::employees::delete(&state.pool, id, auth.organisation_id()).await?;

    audit::log_action(
        &state.pool,
        auth.organisation_id(),
        auth.user_id,
        "EMPLOYEE_DELETED",
        format!(
            "Employee '{} {}' deleted.",
            existing.first_name, existing.last_name
        ),
    )
    .await;

    Ok(Json(serde_json::json!({ "success": true })))
}
