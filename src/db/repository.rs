use sqlx::PgPool;
use uuid::Uuid;

use crate::db::entity::CrudEntity;
use crate::error::{AppError, not_found_as};
use crate::pagination::Pagination;

/// One page of records plus the aggregate totals surfaced via headers.
pub struct Page<E> {
    pub items: Vec<E>,
    pub total_count: i64,
    pub total_pages: i64,
}

fn bad_field_reference(err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
            AppError::BadRequest("Campo informado não existe!".to_string())
        }
        other => AppError::Database(other),
    }
}

pub async fn create<E: CrudEntity>(pool: &PgPool, dto: E::Create) -> Result<E, AppError> {
    E::insert(pool, dto).await.map_err(bad_field_reference)
}

pub async fn update<E: CrudEntity>(
    pool: &PgPool,
    id: Uuid,
    dto: E::Update,
) -> Result<E, AppError> {
    E::update(pool, id, dto).await.map_err(|e| match e {
        sqlx::Error::RowNotFound => AppError::NotFound(E::NOT_FOUND_MSG.to_string()),
        other => bad_field_reference(other),
    })
}

/// Paginated listing. Soft-deleted rows are excluded unless the query asked
/// for them. `order_key` comes pre-validated from the entity whitelist.
pub async fn find_all<E: CrudEntity>(pool: &PgPool, page: &Pagination) -> Result<Page<E>, AppError> {
    let where_sql = if page.include_deleted {
        ""
    } else {
        "WHERE deleted_at IS NULL"
    };

    let items = sqlx::query_as::<_, E>(&format!(
        "SELECT * FROM {} {} ORDER BY {} {} LIMIT $1 OFFSET $2",
        E::TABLE,
        where_sql,
        page.order_key,
        page.order_dir.as_sql(),
    ))
    .bind(page.per_page)
    .bind(page.offset())
    .fetch_all(pool)
    .await?;

    let (total_count,): (i64,) =
        sqlx::query_as(&format!("SELECT COUNT(*) FROM {} {}", E::TABLE, where_sql))
            .fetch_one(pool)
            .await?;

    Ok(Page {
        items,
        total_count,
        total_pages: page.total_pages(total_count),
    })
}

/// Lookup by id regardless of soft-delete state.
pub async fn find_one<E: CrudEntity>(pool: &PgPool, id: Uuid) -> Result<E, AppError> {
    sqlx::query_as::<_, E>(&format!("SELECT * FROM {} WHERE id = $1", E::TABLE))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(E::NOT_FOUND_MSG.to_string()))
}

/// Soft delete: stamps `deleted_at`, the row stays in the store.
pub async fn soft_remove<E: CrudEntity>(pool: &PgPool, id: Uuid) -> Result<E, AppError> {
    sqlx::query_as::<_, E>(&format!(
        "UPDATE {} SET deleted_at = now(), updated_at = now() WHERE id = $1 RETURNING *",
        E::TABLE,
    ))
    .bind(id)
    .fetch_one(pool)
    .await
    .map_err(|e| not_found_as(e, E::NOT_FOUND_MSG))
}

/// Batch restore in one statement. Unknown and already-active ids are
/// silently ignored; callers only learn the count of rows actually brought
/// back.
pub async fn restore<E: CrudEntity>(pool: &PgPool, ids: &[Uuid]) -> Result<u64, AppError> {
    let result = sqlx::query(&format!(
        "UPDATE {} SET deleted_at = NULL, updated_at = now()
         WHERE id = ANY($1) AND deleted_at IS NOT NULL",
        E::TABLE,
    ))
    .bind(ids)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Physical removal of a batch inside one transaction: all targeted rows go
/// or none do. Unknown ids are silently ignored.
pub async fn hard_remove<E: CrudEntity>(pool: &PgPool, ids: &[Uuid]) -> Result<u64, AppError> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(&format!("DELETE FROM {} WHERE id = ANY($1)", E::TABLE))
        .bind(ids)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(result.rows_affected())
}
