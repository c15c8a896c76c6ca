use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub text: String,
    pub field_id: Option<Uuid>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTestimonial {
    pub name: String,
    pub email: String,
    pub text: String,
    pub field_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTestimonial {
    pub name: Option<String>,
    pub email: Option<String>,
    pub text: Option<String>,
    pub field_id: Option<Uuid>,
}
