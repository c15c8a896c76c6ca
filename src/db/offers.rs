use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::entity::CrudEntity;
use crate::models::offer::{CreateOffer, Offer, UpdateOffer};
use crate::pagination::OrderDir;

#[async_trait]
impl CrudEntity for Offer {
    type Create = CreateOffer;
    type Update = UpdateOffer;

    const TABLE: &'static str = "offers";
    const ORDER_KEYS: &'static [&'static str] =
        &["created_at", "updated_at", "title", "amount_cents"];
    const DEFAULT_ORDER: (&'static str, OrderDir) = ("created_at", OrderDir::Desc);

    const CREATED_MSG: &'static str = "Oferta criada com sucesso!";
    const UPDATED_MSG: &'static str = "Oferta atualizada com sucesso!";
    const REMOVED_MSG: &'static str = "Oferta removida com sucesso!";
    const RESTORED_MSG: &'static str = "Ofertas restauradas com sucesso!";
    const HARD_REMOVED_MSG: &'static str = "Ofertas removidas permanentemente!";
    const NOT_FOUND_MSG: &'static str = "Oferta não encontrada!";

    fn id(&self) -> Uuid {
        self.id
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    async fn insert(pool: &PgPool, dto: CreateOffer) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Offer>(
            "INSERT INTO offers (title, description, amount_cents, field_id)
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(dto.title)
        .bind(dto.description)
        .bind(dto.amount_cents)
        .bind(dto.field_id)
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: Uuid, dto: UpdateOffer) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Offer>(
            "UPDATE offers SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                amount_cents = COALESCE($4, amount_cents),
                field_id = COALESCE($5, field_id),
                updated_at = now()
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(dto.title)
        .bind(dto.description)
        .bind(dto.amount_cents)
        .bind(dto.field_id)
        .fetch_one(pool)
        .await
    }
}
