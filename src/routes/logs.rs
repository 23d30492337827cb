use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::LogEntry;
use crate::state::SharedState;

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 500;

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct ListLogsQuery {
    pub limit: Option<i64>,
}

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
    Query(query): Query<ListLogsQuery>,
) -> Result<Json<Vec<LogEntry>>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let entries = db::logs::list(&state.pool, auth.organisation_id(), limit).await?;
    Ok(Json(entries))
}
