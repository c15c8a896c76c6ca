use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::auth::jwt;
use crate::error::AppError;
use crate::models::Role;
use crate::state::SharedState;

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Identity resolved from a valid access token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
    pub field_id: Option<Uuid>,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Forbidden("Acesso negado!".to_string()))
        }
    }

    /// Admits the identity iff ADMIN or a member of `roles`. An empty set
    /// means any authenticated identity.
    pub fn require_roles(&self, roles: &[Role]) -> Result<(), AppError> {
        if self.is_admin() || roles.is_empty() || roles.contains(&self.role) {
            Ok(())
        } else {
            Err(AppError::Forbidden("Acesso negado!".to_string()))
        }
    }
}

impl FromRequestParts<SharedState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or_else(|| AppError::Unauthorized("Não autorizado!".to_string()))?;

        let claims = jwt::decode_access(token, &state.config.jwt_secret)
            .map_err(|_| AppError::Unauthorized("Não autorizado!".to_string()))?;

        Ok(AuthUser {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
            field_id: claims.field,
        })
    }
}

/// Identity for public routes: a missing or invalid credential is tolerated
/// and the request proceeds unauthenticated.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl FromRequestParts<SharedState> for OptionalAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let user = match bearer_token(parts) {
            Some(token) => jwt::decode_access(token, &state.config.jwt_secret)
                .ok()
                .map(|claims| AuthUser {
                    user_id: claims.sub,
                    email: claims.email,
                    role: claims.role,
                    field_id: claims.field,
                }),
            None => None,
        };
        Ok(OptionalAuthUser(user))
    }
}

/// Identity resolved from a refresh token; carries the raw token string for
/// downstream rotation. Missing or invalid credential yields 403.
#[derive(Debug, Clone)]
pub struct RefreshUser {
    pub user_id: Uuid,
    pub raw_token: String,
}

impl FromRequestParts<SharedState> for RefreshUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let token =
            bearer_token(parts).ok_or_else(|| AppError::Forbidden("Acesso negado!".to_string()))?;

        let claims = jwt::decode_refresh(token, &state.config.jwt_refresh_secret)
            .map_err(|_| AppError::Forbidden("Acesso negado!".to_string()))?;

        Ok(RefreshUser {
            user_id: claims.sub,
            raw_token: token.to_string(),
        })
    }
}
