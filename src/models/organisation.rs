use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Organisation {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
