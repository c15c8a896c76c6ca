use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::entity::CrudEntity;
use crate::models::user::{CreateUser, UpdateUser, User};
use crate::pagination::OrderDir;

#[async_trait]
impl CrudEntity for User {
    type Create = CreateUser;
    type Update = UpdateUser;

    const TABLE: &'static str = "users";
    const ORDER_KEYS: &'static [&'static str] =
        &["created_at", "updated_at", "name", "email", "last_access"];
    const DEFAULT_ORDER: (&'static str, OrderDir) = ("name", OrderDir::Asc);

    const CREATED_MSG: &'static str = "Usuário criado com sucesso!";
    const UPDATED_MSG: &'static str = "Usuário atualizado com sucesso!";
    const REMOVED_MSG: &'static str = "Usuário removido com sucesso!";
    const RESTORED_MSG: &'static str = "Usuários restaurados com sucesso!";
    const HARD_REMOVED_MSG: &'static str = "Usuários removidos permanentemente!";
    const NOT_FOUND_MSG: &'static str = "Usuário não encontrado!";

    fn id(&self) -> Uuid {
        self.id
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    async fn insert(pool: &PgPool, dto: CreateUser) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash, role, field_id)
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(dto.name)
        .bind(dto.email)
        .bind(dto.password_hash)
        .bind(dto.role)
        .bind(dto.field_id)
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: Uuid, dto: UpdateUser) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                password_hash = COALESCE($4, password_hash),
                role = COALESCE($5, role),
                field_id = COALESCE($6, field_id),
                updated_at = now()
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(dto.name)
        .bind(dto.email)
        .bind(dto.password_hash)
        .bind(dto.role)
        .bind(dto.field_id)
        .fetch_one(pool)
        .await
    }
}

/// Lookup regardless of soft-delete state; callers branch on the tagged
/// delete status.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn touch_last_access(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET last_access = now() WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn update_password_by_email(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET password_hash = $2, updated_at = now() WHERE email = $1")
        .bind(email)
        .bind(password_hash)
        .execute(pool)
        .await?;
    Ok(())
}
