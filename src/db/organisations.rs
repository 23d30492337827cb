use crate::models::Organisation;

pub async fn create<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    name: &str,
) -> Result<Organisation, sqlx::Error> {
    sqlx::query_as::<_, Organisation>(
        "INSERT INTO organisations (name) VALUES ($1) RETURNING *",
    )
    .bind(name)
    .fetch_one(executor)
    .await
}
