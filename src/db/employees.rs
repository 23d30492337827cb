use sqlx::PgPool;

use crate::models::{Employee, EmployeeWithTeams};

const WITH_TEAMS: &str = "SELECT e.id, e.organisation_id, e.first_name, e.last_name, e.email,
            e.phone, e.created_at,
            COALESCE(array_agg(t.id ORDER BY t.id) FILTER (WHERE t.id IS NOT NULL),
                     ARRAY[]::BIGINT[]) AS team_ids,
            COALESCE(array_agg(t.name ORDER BY t.id) FILTER (WHERE t.id IS NOT NULL),
                     ARRAY[]::TEXT[]) AS team_names
     FROM employees e
     LEFT JOIN employee_teams et ON et.employee_id = e.id
     LEFT JOIN teams t ON t.id = et.team_id";

pub async fn list(pool: &PgPool, organisation_id: i64) -> Result<Vec<EmployeeWithTeams>, sqlx::Error> {
    sqlx::query_as::<_, EmployeeWithTeams>(&format!(
        "{WITH_TEAMS} WHERE e.organisation_id = $1 GROUP BY e.id ORDER BY e.id DESC"
    ))
    .bind(organisation_id)
    .fetch_all(pool)
    .await
}

pub async fn find_with_teams(
    pool: &PgPool,
    id: i64,
    organisation_id: i64,
) -> Result<Option<EmployeeWithTeams>, sqlx::Error> {
    sqlx::query_as::<_, EmployeeWithTeams>(&format!(
        "{WITH_TEAMS} WHERE e.id = $1 AND e.organisation_id = $2 GROUP BY e.id"
    ))
    .bind(id)
    .bind(organisation_id)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_id(
    pool: &PgPool,
    id: i64,
    organisation_id: i64,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        "SELECT * FROM employees WHERE id = $1 AND organisation_id = $2",
    )
    .bind(id)
    .bind(organisation_id)
    .fetch_optional(pool)
    .await
}

pub async fn create(
    pool: &PgPool,
    organisation_id: i64,
    first_name: &str,
    last_name: &str,
    email: Option<&str>,
    phone: Option<&str>,
) -> Result<Employee, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        "INSERT INTO employees (organisation_id, first_name, last_name, email, phone)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(organisation_id)
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(phone)
    .fetch_one(pool)
    .await
}

/// Sparse patch: a NULL argument keeps the stored value. Single statement so
/// the check-then-write sequence cannot interleave with another writer.
pub async fn update(
    pool: &PgPool,
    id: i64,
    organisation_id: i64,
    first_name: Option<&str>,
    last_name: Option<&str>,
    email: Option<&str>,
    phone: Option<&str>,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        "UPDATE employees
         SET first_name = COALESCE($3, first_name),
             last_name = COALESCE($4, last_name),
             email = COALESCE($5, email),
             phone = COALESCE($6, phone)
         WHERE id = $1 AND organisation_id = $2 RETURNING *",
    )
    .bind(id)
    .bind(organisation_id)
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(phone)
    .fetch_optional(pool)
    .await
}

/// Membership rows cascade at the schema level.
pub async fn delete(pool: &PgPool, id: i64, organisation_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM employees WHERE id = $1 AND organisation_id = $2")
        .bind(id)
        .bind(organisation_id)
        .execute(pool)
        .await?;
    Ok(())
}
