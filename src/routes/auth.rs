use axum::Json;
use axum::extract::State;
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use serde_json::json;

use crate::auth::extractor::{AuthUser, RefreshUser};
use crate::auth::jwt::{Claims, RefreshClaims, encode_access, encode_refresh};
use crate::auth::{password, recover};
use crate::db;
use crate::db::entity::CrudEntity;
use crate::db::repository;
use crate::error::AppError;
use crate::models::{TokenType, User};
use crate::response::ApiResponse;
use crate::state::SharedState;

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/signin", post(signin))
        .route("/refresh", post(refresh))
        .route("/me", get(me))
        .route("/send-recover-email", post(send_recover_email))
        .route("/confirm-recover-email", post(confirm_recover_email))
        .route("/new-password", post(new_password))
}

#[derive(Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RecoverRequest {
    pub email: String,
}

#[derive(Deserialize)]
pub struct ConfirmRecoverRequest {
    pub email: String,
    pub token: String,
}

#[derive(Deserialize)]
pub struct NewPasswordRequest {
    pub email: String,
    pub token: String,
    pub password: String,
}

fn issue_tokens(state: &SharedState, user: &User) -> Result<(String, String), AppError> {
    let claims = Claims::new(
        user.id,
        user.email.clone(),
        user.role,
        user.field_id,
        state.config.access_ttl_min,
    );
    let access = encode_access(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    let refresh_claims = RefreshClaims::new(user.id, state.config.refresh_ttl_days);
    let refresh = encode_refresh(&refresh_claims, &state.config.jwt_refresh_secret)
        .map_err(AppError::Internal)?;

    Ok((access, refresh))
}

pub async fn signin(
    State(state): State<SharedState>,
    Json(req): Json<SigninRequest>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    if state.signin_limiter.check(&req.email).is_err() {
        return Err(AppError::RateLimited(
            "Muitas tentativas de login. Tente novamente mais tarde.".to_string(),
        ));
    }

    let user = db::users::find_by_email(&state.pool, &req.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Credenciais inválidas!".to_string()))?;

    if user.delete_status().is_deleted() {
        return Err(AppError::Unauthorized("Credenciais inválidas!".to_string()));
    }

    let valid = password::verify(&req.password, &user.password_hash).map_err(AppError::Internal)?;
    if !valid {
        state.signin_limiter.record_failure(&req.email);
        return Err(AppError::Unauthorized("Credenciais inválidas!".to_string()));
    }

    db::users::touch_last_access(&state.pool, user.id).await?;

    let (access_token, refresh_token) = issue_tokens(&state, &user)?;
    tracing::info!(user = %user.id, "signin");

    Ok(ApiResponse::new(
        "Login realizado com sucesso!",
        json!({
            "accessToken": access_token,
            "refreshToken": refresh_token,
            "user": user,
        }),
    ))
}

/// Stateless refresh: a new access token is issued and the presented refresh
/// credential stays valid until its own expiry.
pub async fn refresh(
    State(state): State<SharedState>,
    refresh_user: RefreshUser,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    let user = repository::find_one::<User>(&state.pool, refresh_user.user_id)
        .await
        .map_err(|_| AppError::Forbidden("Acesso negado!".to_string()))?;

    if user.delete_status().is_deleted() {
        return Err(AppError::Forbidden("Acesso negado!".to_string()));
    }

    let claims = Claims::new(
        user.id,
        user.email.clone(),
        user.role,
        user.field_id,
        state.config.access_ttl_min,
    );
    let access_token =
        encode_access(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    Ok(ApiResponse::new(
        "Token renovado com sucesso!",
        json!({
            "accessToken": access_token,
            "refreshToken": refresh_user.raw_token,
        }),
    ))
}

pub async fn me(
    State(state): State<SharedState>,
    auth: AuthUser,
) -> Result<ApiResponse<User>, AppError> {
    let user = repository::find_one::<User>(&state.pool, auth.user_id).await?;
    Ok(ApiResponse::new("Usuário autenticado!", user))
}

pub async fn send_recover_email(
    State(state): State<SharedState>,
    Json(req): Json<RecoverRequest>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    // Always answer the same way so account existence is not revealed.
    let response = ApiResponse::new(
        "Se o e-mail estiver cadastrado, um código de recuperação foi enviado.",
        json!(null),
    );

    let pool = state.pool.clone();
    let config = state.config.clone();
    let mailer = state.mailer.clone();

    tokio::spawn(async move {
        let user = match db::users::find_by_email(&pool, &req.email).await {
            Ok(Some(user)) if !user.delete_status().is_deleted() => user,
            Ok(_) => return,
            Err(e) => {
                tracing::error!("Recover lookup failed: {e}");
                return;
            }
        };

        let code = match recover::create(&pool, &config, &user.email, TokenType::RecoverEmail).await
        {
            Ok(code) => code,
            Err(e) => {
                tracing::error!("Failed to create recover token: {e}");
                return;
            }
        };

        match &mailer {
            Some(mailer) => {
                if let Err(e) = mailer.send_recover_code(&user.email, &code).await {
                    tracing::error!("Failed to send recover email: {e}");
                }
            }
            None => {
                tracing::warn!("System SMTP not configured. Recover code: {code}");
            }
        }
    });

    Ok(response)
}

pub async fn confirm_recover_email(
    State(state): State<SharedState>,
    Json(req): Json<ConfirmRecoverRequest>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    let valid = recover::check(&state.pool, &state.config, &req.email, &req.token).await?;
    Ok(ApiResponse::new(
        "Verificação realizada!",
        json!({ "valid": valid }),
    ))
}

pub async fn new_password(
    State(state): State<SharedState>,
    Json(req): Json<NewPasswordRequest>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "A senha deve ter pelo menos 8 caracteres.".to_string(),
        ));
    }

    let valid = recover::validate(&state.pool, &state.config, &req.email, &req.token).await?;
    if !valid {
        return Err(AppError::BadRequest(
            "Token inválido ou expirado!".to_string(),
        ));
    }

    let password_hash = password::hash(&req.password).map_err(AppError::Internal)?;
    db::users::update_password_by_email(&state.pool, &req.email, &password_hash).await?;

    Ok(ApiResponse::new("Senha alterada com sucesso!", json!(null)))
}
