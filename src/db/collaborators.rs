use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::entity::CrudEntity;
use crate::models::collaborator::{Collaborator, CreateCollaborator, UpdateCollaborator};
use crate::pagination::OrderDir;

#[async_trait]
impl CrudEntity for Collaborator {
    type Create = CreateCollaborator;
    type Update = UpdateCollaborator;

    const TABLE: &'static str = "collaborators";
    const ORDER_KEYS: &'static [&'static str] = &["created_at", "updated_at", "title"];
    const DEFAULT_ORDER: (&'static str, OrderDir) = ("title", OrderDir::Asc);

    const CREATED_MSG: &'static str = "Colaborador criado com sucesso!";
    const UPDATED_MSG: &'static str = "Colaborador atualizado com sucesso!";
    const REMOVED_MSG: &'static str = "Colaborador removido com sucesso!";
    const RESTORED_MSG: &'static str = "Colaboradores restaurados com sucesso!";
    const HARD_REMOVED_MSG: &'static str = "Colaboradores removidos permanentemente!";
    const NOT_FOUND_MSG: &'static str = "Colaborador não encontrado!";

    fn id(&self) -> Uuid {
        self.id
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    async fn insert(pool: &PgPool, dto: CreateCollaborator) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Collaborator>(
            "INSERT INTO collaborators (title, description, image, field_id)
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(dto.title)
        .bind(dto.description)
        .bind(dto.image)
        .bind(dto.field_id)
        .fetch_one(pool)
        .await
    }

    async fn update(pool: &PgPool, id: Uuid, dto: UpdateCollaborator) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Collaborator>(
            "UPDATE collaborators SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                image = COALESCE($4, image),
                field_id = COALESCE($5, field_id),
                updated_at = now()
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(dto.title)
        .bind(dto.description)
        .bind(dto.image)
        .bind(dto.field_id)
        .fetch_one(pool)
        .await
    }
}
