use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::entity::CrudEntity;
use crate::models::field::{CreateField, Field, UpdateField};
use crate::pagination::OrderDir;

#[async_trait]
impl CrudEntity for Field {
    type Create = CreateField;
    type Update = UpdateField;

    const TABLE: &'static str = "fields";
    const ORDER_KEYS: &'static [&'static str] =
        &["created_at", "updated_at", "name", "country", "state"];
    const DEFAULT_ORDER: (&'static str, OrderDir) = ("name", OrderDir::Asc);

    const CREATED_MSG: &'static str = "Campo criado com sucesso!";
    const UPDATED_MSG: &'static str = "Campo atualizado com sucesso!";
    const REMOVED_MSG: &'static str = "Campo removido com sucesso!";
    const RESTORED_MSG: &'static str = "Campos restaurados com sucesso!";
    const HARD_REMOVED_MSG: &'static str = "Campos removidos permanentemente!";
    const NOT_FOUND_MSG: &'static str = "Campo não encontrado!";

    fn id(&self) -> Uuid {
        self.id
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    async fn insert(pool: &PgPool, dto: CreateField) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Field>(
            "INSERT INTO fields (name, continent, country, state, description)
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(dto.name)
        .bind(dto.continent)
        .bind(dto.country)
        .bind(dto.state)
        .bind(dto.description)
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: Uuid, dto: UpdateField) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Field>(
            "UPDATE fields SET
                name = COALESCE($2, name),
                continent = COALESCE($3, continent),
                country = COALESCE($4, country),
                state = COALESCE($5, state),
                description = COALESCE($6, description),
                updated_at = now()
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(dto.name)
        .bind(dto.continent)
        .bind(dto.country)
        .bind(dto.state)
        .bind(dto.description)
        .fetch_one(pool)
        .await
    }
}
