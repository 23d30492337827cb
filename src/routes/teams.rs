use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::middleware::audit;
use crate::models::{Team, TeamWithMemberCount};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateTeam {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct UpdateTeam {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Members can be addressed one at a time or as a batch.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MembershipRequest {
    pub employee_id: Option<i64>,
    pub employee_ids: Option<Vec<i64>>,
}

impl MembershipRequest {
    fn normalize(self) -> Vec<i64> {
        match self.employee_ids {
            Some(ids) if !ids.is_empty() => ids,
            _ => self.employee_id.into_iter().collect(),
        }
    }
}

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<TeamWithMemberCount>>, AppError> {
    let teams = db::teams::list(&state.pool, auth.organisation_id()).await?;
    Ok(Json(teams))
}

pub async fn get(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Team>, AppError> {
    let team = db::teams::find_by_id(&state.pool, id, auth.organisation_id())
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;
    Ok(Json(team))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<CreateTeam>,
) -> Result<(StatusCode, Json<Team>), AppError> {
    let team = db::teams::create(
        &state.pool,
        auth.organisation_id(),
        &req.name,
        req.description.as_deref(),
    )
    .await?;

    audit::log_action(
        &state.pool,
        auth.organisation_id(),
        auth.user_id,
        "TEAM_CREATED",
        format!("Team '{}' created.", team.name),
    )
    .await;

    Ok((StatusCode::CREATED, Json(team)))
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTeam>,
) -> Result<Json<Team>, AppError> {
    let team = db::teams::update(
        &state.pool,
        id,
        auth.organisation_id(),
        req.name.as_deref(),
        req.description.as_deref(),
    )
    .await?
    .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

    audit::log_action(
        &state.pool,
        auth.organisation_id(),
        auth.user_id,
        "TEAM_UPDATED",
        format!("Team '{}' updated.", team.name),
    )
    .await;

    Ok(Json(team))
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let existing = db::teams::find_by_id(&state.pool, id, auth.organisation_id())
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

    // Membership rows and the team go together or not at all.
    let mut tx = state.pool.begin().await?;
    db::memberships::delete_by_team(&mut *tx, id).await?;
    db::teams::delete(&mut *tx, id, auth.organisation_id()).await?;
    tx.commit().await?;

    audit::log_action(
        &state.pool,
        auth.organisation_id(),
        auth.user_id,
        "TEAM_DELETED",
        format!("Team '{}' deleted.", existing.name),
    )
    .await;

    Ok(Json(serde_json::json!({ "success": true })))
}

pub async fn assign(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(req): Json<MembershipRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let ids = req.normalize();
    if ids.is_empty() {
        return Err(AppError::BadRequest("employeeId(s) required".to_string()));
    }

    let team = db::teams::find_by_id(&state.pool, id, auth.organisation_id())
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

    let mut assigned = Vec::with_capacity(ids.len());

    for employee_id in ids {
        // Both sides must belong to the caller's organisation.
        let employee = db::employees::find_by_id(&state.pool, employee_id, auth.organisation_id())
            .await?
            .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;

        db::memberships::assign(&state.pool, employee_id, team.id).await?;
        assigned.push(employee_id);

        audit::log_action(
            &state.pool,
            auth.organisation_id(),
            auth.user_id,
            "TEAM_ASSIGNED",
            format!(
                "Employee '{} {}' assigned to team '{}'.",
                employee.first_name, employee.last_name, team.name
            ),
        )
        .await;
    }

    Ok(Json(serde_json::json!({ "assigned": assigned })))
}

pub async fn unassign(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(req): Json<MembershipRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let ids = req.normalize();

    let team = db::teams::find_by_id(&state.pool, id, auth.organisation_id())
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

    let mut removed = Vec::with_capacity(ids.len());

    for employee_id in ids {
        let employee = db::employees::find_by_id(&state.pool, employee_id, auth.organisation_id())
            .await?
            .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;

        db::memberships::unassign(&state.pool, employee_id, team.id).await?;
        removed.push(employee_id);

        audit::log_action(
            &state.pool,
            auth.organisation_id(),
            auth.user_id,
            "TEAM_UNASSIGNED",
            format!(
                "Employee '{} {}' removed from team '{}'.",
                employee.first_name, employee.last_name, team.name
            ),
        )
        .await;
    }

    Ok(Json(serde_json::json!({ "removed": removed })))
}
