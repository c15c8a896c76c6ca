use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::entity::CrudEntity;
use crate::models::agenda::{Agenda, CreateAgenda, UpdateAgenda};
use crate::pagination::OrderDir;

#[async_trait]
impl CrudEntity for Agenda {
    type Create = CreateAgenda;
    type Update = UpdateAgenda;

    const TABLE: &'static str = "agendas";
    const ORDER_KEYS: &'static [&'static str] = &["created_at", "updated_at", "title", "date"];
    const DEFAULT_ORDER: (&'static str, OrderDir) = ("date", OrderDir::Desc);

    const CREATED_MSG: &'static str = "Agenda criada com sucesso!";
    const UPDATED_MSG: &'static str = "Agenda atualizada com sucesso!";
    const REMOVED_MSG: &'static str = "Agenda removida com sucesso!";
    const RESTORED_MSG: &'static str = "Agendas restauradas com sucesso!";
    const HARD_REMOVED_MSG: &'static str = "Agendas removidas permanentemente!";
    const NOT_FOUND_MSG: &'static str = "Agenda não encontrada!";

    fn id(&self) -> Uuid {
        self.id
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    async fn insert(pool: &PgPool, dto: CreateAgenda) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Agenda>(
            "INSERT INTO agendas (title, message, date, field_id)
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(dto.title)
        .bind(dto.message)
        .bind(dto.date)
        .bind(dto.field_id)
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: Uuid, dto: UpdateAgenda) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Agenda>(
            "UPDATE agendas SET
                title = COALESCE($2, title),
                message = COALESCE($3, message),
                date = COALESCE($4, date),
                field_id = COALESCE($5, field_id),
                updated_at = now()
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(dto.title)
        .bind(dto.message)
        .bind(dto.date)
        .bind(dto.field_id)
        .fetch_one(pool)
        .await
    }
}
