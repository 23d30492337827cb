use sqlx::PgPool;

/// Append an audit entry for a mutation. Best-effort: a failed write is
/// logged and never fails the request that triggered it.
pub async fn log_action(
    pool: &PgPool,
    organisation_id: i64,
    user_id: i64,
    action: &str,
    message: String,
) {
    let details = serde_json::json!({ "message": message });
    if let Err(e) = crate::db::logs::append(pool, organisation_id, user_id, action, &details).await
    {
        tracing::error!("Failed to append audit log entry: {e}");
    }
}
