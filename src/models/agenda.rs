use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Agenda {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub date: DateTime<Utc>,
    pub field_id: Uuid,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAgenda {
    pub title: String,
    pub message: String,
    pub date: DateTime<Utc>,
    pub field_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAgenda {
    pub title: Option<String>,
    pub message: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub field_id: Option<Uuid>,
}
