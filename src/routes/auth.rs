use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{encode_token, Claims};
use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::middleware::audit;
use crate::models::User;
use crate::state::SharedState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub org_name: String,
    pub admin_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Create an organisation together with its admin user.
pub async fn register(
    State(state): State<SharedState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    if req.org_name.is_empty()
        || req.admin_name.is_empty()
        || req.email.is_empty()
        || req.password.is_empty()
    {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    }

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    // Organisation and admin user are created together or not at all.
    let mut tx = state.pool.begin().await?;

    let org = db::organisations::create(&mut *tx, &req.org_name).await?;

    let user = db::users::create(&mut *tx, org.id, &req.admin_name, &req.email, &pw_hash)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Email already registered".to_string())
            }
            _ => AppError::Database(e),
        })?;

    tx.commit().await?;

    audit::log_action(
        &state.pool,
        org.id,
        user.id,
        "ORG_CREATED",
        format!("User '{}' created organisation '{}'", user.id, org.id),
    )
    .await;

    let claims = Claims::new(user.id, org.id);
    let token = encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    Ok(Json(AuthResponse { token, user }))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    // Uniform error for unknown email and bad password alike.
    let user = db::users::find_by_email(&state.pool, &req.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

    let valid = password::verify(&req.password, &user.password_hash).map_err(AppError::Internal)?;
    if !valid {
        return Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    audit::log_action(
        &state.pool,
        user.organisation_id,
        user.id,
        "LOGIN",
        format!("User '{}' logged in", user.id),
    )
    .await;

    let claims = Claims::new(user.id, user.organisation_id);
    let token = encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    Ok(Json(AuthResponse { token, user }))
}
