use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Volunteer {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub joined: NaiveDate,
    pub occupation: Option<String>,
    pub church_name: Option<String>,
    pub field_id: Uuid,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateVolunteer {
    pub name: String,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub joined: NaiveDate,
    pub occupation: Option<String>,
    pub church_name: Option<String>,
    pub field_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UpdateVolunteer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub joined: Option<NaiveDate>,
    pub occupation: Option<String>,
    pub church_name: Option<String>,
    pub field_id: Option<Uuid>,
}
