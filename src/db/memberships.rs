use sqlx::PgPool;

/// Idempotent: assigning an existing pair is a no-op.
pub async fn assign(pool: &PgPool, employee_id: i64, team_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO employee_teams (employee_id, team_id) VALUES ($1, $2)
         ON CONFLICT (employee_id, team_id) DO NOTHING",
    )
    .bind(employee_id)
    .bind(team_id)
    .execute(pool)
    .await?;
    Ok(())
}

/// No-op when the pair is absent.
pub async fn unassign(pool: &PgPool, employee_id: i64, team_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM employee_teams WHERE employee_id = $1 AND team_id = $2")
        .bind(employee_id)
        .bind(team_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete_by_team<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    team_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM employee_teams WHERE team_id = $1")
        .bind(team_id)
        .execute(executor)
        .await?;
    Ok(())
}
