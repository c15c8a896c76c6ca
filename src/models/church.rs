use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Church {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub field_id: Uuid,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateChurch {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub field_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UpdateChurch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub field_id: Option<Uuid>,
}
