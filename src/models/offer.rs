use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Offer {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Monetary value in cents, avoiding float rounding.
    pub amount_cents: i64,
    pub field_id: Uuid,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateOffer {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub amount_cents: i64,
    pub field_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UpdateOffer {
    pub title: Option<String>,
    pub description: Option<String>,
    pub amount_cents: Option<i64>,
    pub field_id: Option<Uuid>,
}
