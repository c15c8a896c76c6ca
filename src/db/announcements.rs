use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::entity::CrudEntity;
use crate::models::announcement::{Announcement, CreateAnnouncement, UpdateAnnouncement};
use crate::pagination::OrderDir;

#[async_trait]
impl CrudEntity for Announcement {
    type Create = CreateAnnouncement;
    type Update = UpdateAnnouncement;

    const TABLE: &'static str = "announcements";
    const ORDER_KEYS: &'static [&'static str] = &["created_at", "updated_at", "title", "fixed"];
    const DEFAULT_ORDER: (&'static str, OrderDir) = ("created_at", OrderDir::Desc);

    const CREATED_MSG: &'static str = "Anúncio criado com sucesso!";
    const UPDATED_MSG: &'static str = "Anúncio atualizado com sucesso!";
    const REMOVED_MSG: &'static str = "Anúncio removido com sucesso!";
    const RESTORED_MSG: &'static str = "Anúncios restaurados com sucesso!";
    const HARD_REMOVED_MSG: &'static str = "Anúncios removidos permanentemente!";
    const NOT_FOUND_MSG: &'static str = "Anúncio não encontrado!";

    fn id(&self) -> Uuid {
        self.id
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    async fn insert(pool: &PgPool, dto: CreateAnnouncement) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Announcement>(
            "INSERT INTO announcements (title, message, fixed, field_id)
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(dto.title)
        .bind(dto.message)
        .bind(dto.fixed)
        .bind(dto.field_id)
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: Uuid, dto: UpdateAnnouncement) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Announcement>(
            "UPDATE announcements SET
                title = COALESCE($2, title),
                message = COALESCE($3, message),
                fixed = COALESCE($4, fixed),
                field_id = COALESCE($5, field_id),
                updated_at = now()
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(dto.title)
        .bind(dto.message)
        .bind(dto.fixed)
        .bind(dto.field_id)
        .fetch_one(pool)
        .await
    }
}
