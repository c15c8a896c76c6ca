use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::entity::CrudEntity;
use crate::models::church::{Church, CreateChurch, UpdateChurch};
use crate::pagination::OrderDir;

#[async_trait]
impl CrudEntity for Church {
    type Create = CreateChurch;
    type Update = UpdateChurch;

    const TABLE: &'static str = "churches";
    const ORDER_KEYS: &'static [&'static str] = &["created_at", "updated_at", "name"];
    const DEFAULT_ORDER: (&'static str, OrderDir) = ("name", OrderDir::Asc);

    const CREATED_MSG: &'static str = "Igreja criada com sucesso!";
    const UPDATED_MSG: &'static str = "Igreja atualizada com sucesso!";
    const REMOVED_MSG: &'static str = "Igreja removida com sucesso!";
    const RESTORED_MSG: &'static str = "Igrejas restauradas com sucesso!";
    const HARD_REMOVED_MSG: &'static str = "Igrejas removidas permanentemente!";
    const NOT_FOUND_MSG: &'static str = "Igreja não encontrada!";

    fn id(&self) -> Uuid {
        self.id
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    async fn insert(pool: &PgPool, dto: CreateChurch) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Church>(
            "INSERT INTO churches (name, description, image, field_id)
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(dto.name)
        .bind(dto.description)
        .bind(dto.image)
        .bind(dto.field_id)
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: Uuid, dto: UpdateChurch) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Church>(
            "UPDATE churches SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                image = COALESCE($4, image),
                field_id = COALESCE($5, field_id),
                updated_at = now()
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(dto.name)
        .bind(dto.description)
        .bind(dto.image)
        .bind(dto.field_id)
        .fetch_one(pool)
        .await
    }
}
