use axum::extract::{Path, Query, State};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db::entity::CrudEntity;
use crate::db::repository;
use crate::error::AppError;
use crate::pagination::PageQuery;
use crate::response::{ApiResponse, PageResponse};
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct IdsPayload {
    pub ids: Vec<Uuid>,
}

/// The uniform HTTP surface every entity module exposes, instantiated per
/// schema. List and find-one are public; create/update/remove consult the
/// entity's mutation role set; restore and hard-remove are ADMIN-only.
pub fn crud_routes<E: CrudEntity>() -> Router<SharedState> {
    Router::new()
        .route("/", post(create::<E>).get(list::<E>))
        .route("/restore", put(restore::<E>))
        .route("/hard-remove", delete(hard_remove::<E>))
        .route(
            "/{id}",
            get(find_one::<E>).put(update::<E>).delete(remove::<E>),
        )
}

pub async fn create<E: CrudEntity>(
    State(state): State<SharedState>,
    auth: AuthUser,
    Json(dto): Json<E::Create>,
) -> Result<ApiResponse<E>, AppError> {
    auth.require_roles(E::MUTATION_ROLES)?;

    let record = repository::create::<E>(&state.pool, dto).await?;
    tracing::info!(table = E::TABLE, id = %record.id(), by = %auth.user_id, "record created");

    Ok(ApiResponse::new(E::CREATED_MSG, record))
}

pub async fn list<E: CrudEntity>(
    State(state): State<SharedState>,
    Query(query): Query<PageQuery>,
) -> Result<PageResponse<E>, AppError> {
    let page = query.normalize(state.config.items_per_page, E::ORDER_KEYS, E::DEFAULT_ORDER);
    let result = repository::find_all::<E>(&state.pool, &page).await?;

    Ok(PageResponse::new(
        E::LISTED_MSG,
        result.items,
        result.total_count,
        result.total_pages,
    ))
}

pub async fn find_one<E: CrudEntity>(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<E>, AppError> {
    let record = repository::find_one::<E>(&state.pool, id).await?;
    Ok(ApiResponse::new(E::FOUND_MSG, record))
}

pub async fn update<E: CrudEntity>(
    State(state): State<SharedState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(dto): Json<E::Update>,
) -> Result<ApiResponse<E>, AppError> {
    auth.require_roles(E::MUTATION_ROLES)?;

    let record = repository::update::<E>(&state.pool, id, dto).await?;
    tracing::info!(table = E::TABLE, id = %id, by = %auth.user_id, "record updated");

    Ok(ApiResponse::new(E::UPDATED_MSG, record))
}

pub async fn remove<E: CrudEntity>(
    State(state): State<SharedState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<E>, AppError> {
    auth.require_roles(E::MUTATION_ROLES)?;

    let record = repository::soft_remove::<E>(&state.pool, id).await?;
    tracing::info!(table = E::TABLE, id = %id, by = %auth.user_id, "record soft-deleted");

    Ok(ApiResponse::new(E::REMOVED_MSG, record))
}

pub async fn restore<E: CrudEntity>(
    State(state): State<SharedState>,
    auth: AuthUser,
    Json(payload): Json<IdsPayload>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    auth.require_admin()?;

    let count = repository::restore::<E>(&state.pool, &payload.ids).await?;
    tracing::info!(table = E::TABLE, count, by = %auth.user_id, "records restored");

    Ok(ApiResponse::new(E::RESTORED_MSG, json!({ "count": count })))
}

pub async fn hard_remove<E: CrudEntity>(
    State(state): State<SharedState>,
    auth: AuthUser,
    Json(payload): Json<IdsPayload>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    auth.require_admin()?;

    let count = repository::hard_remove::<E>(&state.pool, &payload.ids).await?;
    tracing::info!(table = E::TABLE, count, by = %auth.user_id, "records hard-deleted");

    Ok(ApiResponse::new(E::HARD_REMOVED_MSG, json!({ "count": count })))
}
