use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::jwt;
use crate::error::AppError;
use crate::state::SharedState;

/// Identity resolved from the bearer token. Guards every route except
/// registration and login.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i64,
    pub organisation_id: i64,
}

impl AuthUser {
    pub fn organisation_id(&self) -> i64 {
        self.organisation_id
    }
}

impl FromRequestParts<SharedState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .ok_or_else(|| AppError::Unauthorized("Missing authentication token".to_string()))?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::Unauthorized("Invalid authorization header".to_string()))?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized("Missing authentication token".to_string()))?;

        let claims = jwt::decode_token(token, &state.config.jwt_secret)
            .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;

        Ok(AuthUser {
            user_id: claims.sub,
            organisation_id: claims.org,
        })
    }
}
