use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "token_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    RecoverEmail,
}

/// One-time code bound to an email and a purpose. Only the sha256 hash of
/// the code is ever stored.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct OneTimeToken {
    pub id: Uuid,
    pub email: String,
    pub token_type: TokenType,
    #[serde(skip_serializing)]
    pub token_hash: String,
    pub used: bool,
    pub created_at: DateTime<Utc>,
}
