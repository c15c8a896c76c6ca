use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Report {
    pub id: Uuid,
    pub title: String,
    pub short_description: String,
    pub text: String,
    pub date: DateTime<Utc>,
    pub field_id: Uuid,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateReport {
    pub title: String,
    pub short_description: String,
    pub text: String,
    pub date: DateTime<Utc>,
    pub field_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UpdateReport {
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub text: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub field_id: Option<Uuid>,
}
