use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::{LogDetails, LogEntry};

/// Append one immutable record. Rows are never updated or deleted.
pub async fn append(
    pool: &PgPool,
    organisation_id: i64,
    user_id: i64,
    action: &str,
    details: &serde_json::Value,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO logs (organisation_id, user_id, action, details)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(organisation_id)
    .bind(user_id)
    .bind(action)
    .bind(details.to_string())
    .execute(pool)
    .await?;
    Ok(())
}

#[derive(sqlx::FromRow)]
struct LogRow {
    id: i64,
    organisation_id: i64,
    user_id: Option<i64>,
    action: String,
    details: String,
    timestamp: DateTime<Utc>,
    user_name: Option<String>,
}

pub async fn list(
    pool: &PgPool,
    organisation_id: i64,
    limit: i64,
) -> Result<Vec<LogEntry>, sqlx::Error> {
    let rows = sqlx::query_as::<_, LogRow>(
        "SELECT l.id, l.organisation_id, l.user_id, l.action, l.details, l.timestamp,
                u.name AS user_name
         FROM logs l
         LEFT JOIN users u ON u.id = l.user_id
         WHERE l.organisation_id = $1
         ORDER BY l.timestamp DESC
         LIMIT $2",
    )
    .bind(organisation_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| LogEntry {
            id: row.id,
            organisation_id: row.organisation_id,
            user_id: row.user_id,
            action: row.action,
            details: LogDetails::parse(&row.details),
            timestamp: row.timestamp,
            user_name: row.user_name,
        })
        .collect())
}
