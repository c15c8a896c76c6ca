use axum::extract::{Path, Query, State};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extractor::{AuthUser, OptionalAuthUser};
use crate::auth::password;
use crate::db::entity::CrudEntity;
use crate::db::repository;
use crate::error::AppError;
use crate::models::user::{CreateUser, UpdateUser};
use crate::models::{Role, User};
use crate::pagination::PageQuery;
use crate::response::{ApiResponse, PageResponse};
use crate::routes::crud;
use crate::state::SharedState;

/// Same surface shape as the generic template, with user-specific wiring:
/// password hashing, unique e-mail, self-or-admin ownership checks.
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(create).get(list))
        .route("/restore", put(crud::restore::<User>))
        .route("/hard-remove", delete(crud::hard_remove::<User>))
        .route("/{id}", get(find_one).put(update).delete(remove))
}

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
    pub field_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub field_id: Option<Uuid>,
}

fn map_user_error(err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::RowNotFound => {
            AppError::NotFound(<User as CrudEntity>::NOT_FOUND_MSG.to_string())
        }
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            AppError::Conflict("E-mail já cadastrado!".to_string())
        }
        sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
            AppError::BadRequest("Campo informado não existe!".to_string())
        }
        other => AppError::Database(other),
    }
}

/// Self-registration is open and always yields VOLUNTEER; only an ADMIN
/// caller may assign a different role.
pub async fn create(
    State(state): State<SharedState>,
    OptionalAuthUser(caller): OptionalAuthUser,
    Json(req): Json<CreateUserRequest>,
) -> Result<ApiResponse<User>, AppError> {
    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "A senha deve ter pelo menos 8 caracteres.".to_string(),
        ));
    }

    let is_admin = caller.as_ref().is_some_and(|c| c.is_admin());
    let role = if is_admin {
        req.role.unwrap_or(Role::Volunteer)
    } else {
        Role::Volunteer
    };

    let password_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    let user = User::insert(
        &state.pool,
        CreateUser {
            name: req.name,
            email: req.email,
            password_hash,
            role,
            field_id: req.field_id,
        },
    )
    .await
    .map_err(map_user_error)?;

    tracing::info!(user = %user.id, "user created");
    Ok(ApiResponse::new(
        <User as CrudEntity>::CREATED_MSG,
        user,
    ))
}

pub async fn list(
    State(state): State<SharedState>,
    auth: AuthUser,
    Query(query): Query<PageQuery>,
) -> Result<PageResponse<User>, AppError> {
    auth.require_admin()?;

    let page = query.normalize(
        state.config.items_per_page,
        <User as CrudEntity>::ORDER_KEYS,
        <User as CrudEntity>::DEFAULT_ORDER,
    );
    let result = repository::find_all::<User>(&state.pool, &page).await?;

    Ok(PageResponse::new(
        <User as CrudEntity>::LISTED_MSG,
        result.items,
        result.total_count,
        result.total_pages,
    ))
}

pub async fn find_one(
    State(state): State<SharedState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<User>, AppError> {
    if auth.user_id != id {
        auth.require_admin()?;
    }
    let user = repository::find_one::<User>(&state.pool, id).await?;
    Ok(ApiResponse::new(<User as CrudEntity>::FOUND_MSG, user))
}

pub async fn update(
    State(state): State<SharedState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<ApiResponse<User>, AppError> {
    if auth.user_id != id {
        auth.require_admin()?;
    }
    if req.role.is_some() && !auth.is_admin() {
        return Err(AppError::Forbidden("Acesso negado!".to_string()));
    }

    let password_hash = match &req.password {
        Some(password) => {
            if password.len() < 8 {
                return Err(AppError::BadRequest(
                    "A senha deve ter pelo menos 8 caracteres.".to_string(),
                ));
            }
            Some(password::hash(password).map_err(AppError::Internal)?)
        }
        None => None,
    };

    let user = User::update(
        &state.pool,
        id,
        UpdateUser {
            name: req.name,
            email: req.email,
            password_hash,
            role: req.role,
            field_id: req.field_id,
        },
    )
    .await
    .map_err(map_user_error)?;

    tracing::info!(user = %user.id, by = %auth.user_id, "user updated");
    Ok(ApiResponse::new(
        <User as CrudEntity>::UPDATED_MSG,
        user,
    ))
}

pub async fn remove(
    State(state): State<SharedState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<User>, AppError> {
    if auth.user_id != id {
        auth.require_admin()?;
    }

    let user = repository::soft_remove::<User>(&state.pool, id).await?;
    tracing::info!(user = %id, by = %auth.user_id, "user soft-deleted");

    Ok(ApiResponse::new(
        <User as CrudEntity>::REMOVED_MSG,
        user,
    ))
}
