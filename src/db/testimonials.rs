use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::entity::CrudEntity;
use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
use crate::pagination::OrderDir;

#[async_trait]
impl CrudEntity for Testimonial {
    type Create = CreateTestimonial;
    type Update = UpdateTestimonial;

    const TABLE: &'static str = "testimonials";
    const ORDER_KEYS: &'static [&'static str] = &["created_at", "updated_at", "name"];
    const DEFAULT_ORDER: (&'static str, OrderDir) = ("created_at", OrderDir::Desc);

    const CREATED_MSG: &'static str = "Testemunho criado com sucesso!";
    const UPDATED_MSG: &'static str = "Testemunho atualizado com sucesso!";
    const REMOVED_MSG: &'static str = "Testemunho removido com sucesso!";
    const RESTORED_MSG: &'static str = "Testemunhos restaurados com sucesso!";
    const HARD_REMOVED_MSG: &'static str = "Testemunhos removidos permanentemente!";
    const NOT_FOUND_MSG: &'static str = "Testemunho não encontrado!";

    fn id(&self) -> Uuid {
        self.id
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    async fn insert(pool: &PgPool, dto: CreateTestimonial) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Testimonial>(
            "INSERT INTO testimonials (name, email, text, field_id)
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(dto.name)
        .bind(dto.email)
        .bind(dto.text)
        .bind(dto.field_id)
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: Uuid, dto: UpdateTestimonial) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Testimonial>(
            "UPDATE testimonials SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                text = COALESCE($4, text),
                field_id = COALESCE($5, field_id),
                updated_at = now()
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(dto.name)
        .bind(dto.email)
        .bind(dto.text)
        .bind(dto.field_id)
        .fetch_one(pool)
        .await
    }
}
