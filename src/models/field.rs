use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tenant/regional grouping most records belong to.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Field {
    pub id: Uuid,
    pub name: String,
    pub continent: String,
    pub country: String,
    pub state: String,
    pub description: String,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateField {
    pub name: String,
    pub continent: String,
    pub country: String,
    pub state: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateField {
    pub name: Option<String>,
    pub continent: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub description: Option<String>,
}
