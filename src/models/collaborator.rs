use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub field_id: Option<Uuid>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCollaborator {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub field_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCollaborator {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub field_id: Option<Uuid>,
}
