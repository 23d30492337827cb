use sqlx::PgPool;

use crate::models::{Team, TeamWithMemberCount};

pub async fn list(
    pool: &PgPool,
    organisation_id: i64,
) -> Result<Vec<TeamWithMemberCount>, sqlx::Error> {
    sqlx::query_as::<_, TeamWithMemberCount>(
        "SELECT t.id, t.organisation_id, t.name, t.description, t.created_at,
                COUNT(et.employee_id) AS member_count
         FROM teams t
         LEFT JOIN employee_teams et ON et.team_id = t.id
         WHERE t.organisation_id = $1
         GROUP BY t.id
         ORDER BY t.id DESC",
    )
    .bind(organisation_id)
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(
    pool: &PgPool,
    id: i64,
    organisation_id: i64,
) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = $1 AND organisation_id = $2")
        .bind(id)
        .bind(organisation_id)
        .fetch_optional(pool)
        .await
}

pub async fn create(
    pool: &PgPool,
    organisation_id: i64,
    name: &str,
    description: Option<&str>,
) -> Result<Team, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        "INSERT INTO teams (organisation_id, name, description)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(organisation_id)
    .bind(name)
    .bind(description)
    .fetch_one(pool)
    .await
}

/// Sparse patch: a NULL argument keeps the stored value.
pub async fn update(
    pool: &PgPool,
    id: i64,
    organisation_id: i64,
    name: Option<&str>,
    description: Option<&str>,
) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        "UPDATE teams
         SET name = COALESCE($3, name),
             description = COALESCE($4, description)
         WHERE id = $1 AND organisation_id = $2 RETURNING *",
    )
    .bind(id)
    .bind(organisation_id)
    .bind(name)
    .bind(description)
    .fetch_optional(pool)
    .await
}

pub async fn delete<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    id: i64,
    organisation_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM teams WHERE id = $1 AND organisation_id = $2")
        .bind(id)
        .bind(organisation_id)
        .execute(executor)
        .await?;
    Ok(())
}
