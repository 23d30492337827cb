use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub organisation_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Team row enriched with its membership count.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct TeamWithMemberCount {
    pub id: i64,
    pub organisation_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub member_count: i64,
}
