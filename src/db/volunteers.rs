use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::entity::CrudEntity;
use crate::models::volunteer::{CreateVolunteer, UpdateVolunteer, Volunteer};
use crate::pagination::OrderDir;

#[async_trait]
impl CrudEntity for Volunteer {
    type Create = CreateVolunteer;
    type Update = UpdateVolunteer;

    const TABLE: &'static str = "volunteers";
    const ORDER_KEYS: &'static [&'static str] = &["created_at", "updated_at", "name", "joined"];
    const DEFAULT_ORDER: (&'static str, OrderDir) = ("name", OrderDir::Asc);

    const CREATED_MSG: &'static str = "Voluntário criado com sucesso!";
    const UPDATED_MSG: &'static str = "Voluntário atualizado com sucesso!";
    const REMOVED_MSG: &'static str = "Voluntário removido com sucesso!";
    const RESTORED_MSG: &'static str = "Voluntários restaurados com sucesso!";
    const HARD_REMOVED_MSG: &'static str = "Voluntários removidos permanentemente!";
    const NOT_FOUND_MSG: &'static str = "Voluntário não encontrado!";

    fn id(&self) -> Uuid {
        self.id
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    async fn insert(pool: &PgPool, dto: CreateVolunteer) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Volunteer>(
            "INSERT INTO volunteers (name, email, avatar, joined, occupation, church_name, field_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(dto.name)
        .bind(dto.email)
        .bind(dto.avatar)
        .bind(dto.joined)
        .bind(dto.occupation)
        .bind(dto.church_name)
        .bind(dto.field_id)
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: Uuid, dto: UpdateVolunteer) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Volunteer>(
            "UPDATE volunteers SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                avatar = COALESCE($4, avatar),
                joined = COALESCE($5, joined),
                occupation = COALESCE($6, occupation),
                church_name = COALESCE($7, church_name),
                field_id = COALESCE($8, field_id),
                updated_at = now()
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(dto.name)
        .bind(dto.email)
        .bind(dto.avatar)
        .bind(dto.joined)
        .bind(dto.occupation)
        .bind(dto.church_name)
        .bind(dto.field_id)
        .fetch_one(pool)
        .await
    }
}
