use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::entity::CrudEntity;
use crate::models::report::{CreateReport, Report, UpdateReport};
use crate::pagination::OrderDir;

#[async_trait]
impl CrudEntity for Report {
    type Create = CreateReport;
    type Update = UpdateReport;

    const TABLE: &'static str = "reports";
    const ORDER_KEYS: &'static [&'static str] = &["created_at", "updated_at", "title", "date"];
    const DEFAULT_ORDER: (&'static str, OrderDir) = ("date", OrderDir::Desc);

    const CREATED_MSG: &'static str = "Relatório criado com sucesso!";
    const UPDATED_MSG: &'static str = "Relatório atualizado com sucesso!";
    const REMOVED_MSG: &'static str = "Relatório removido com sucesso!";
    const RESTORED_MSG: &'static str = "Relatórios restaurados com sucesso!";
    const HARD_REMOVED_MSG: &'static str = "Relatórios removidos permanentemente!";
    const NOT_FOUND_MSG: &'static str = "Relatório não encontrado!";

    fn id(&self) -> Uuid {
        self.id
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    async fn insert(pool: &PgPool, dto: CreateReport) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Report>(
            "INSERT INTO reports (title, short_description, text, date, field_id)
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(dto.title)
        .bind(dto.short_description)
        .bind(dto.text)
        .bind(dto.date)
        .bind(dto.field_id)
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: Uuid, dto: UpdateReport) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Report>(
            "UPDATE reports SET
                title = COALESCE($2, title),
                short_description = COALESCE($3, short_description),
                text = COALESCE($4, text),
                date = COALESCE($5, date),
                field_id = COALESCE($6, field_id),
                updated_at = now()
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(dto.title)
        .bind(dto.short_description)
        .bind(dto.text)
        .bind(dto.date)
        .bind(dto.field_id)
        .fetch_one(pool)
        .await
    }
}
