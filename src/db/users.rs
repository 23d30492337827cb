use sqlx::PgPool;

use crate::models::User;

pub async fn create<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    organisation_id: i64,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (organisation_id, name, email, password_hash)
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(organisation_id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(executor)
    .await
}

/// Global lookup: email uniqueness is enforced across all organisations.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}
