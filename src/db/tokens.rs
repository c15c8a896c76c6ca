use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{OneTimeToken, TokenType};

pub async fn create(
    pool: &PgPool,
    email: &str,
    token_type: TokenType,
    token_hash: &str,
) -> Result<OneTimeToken, sqlx::Error> {
    sqlx::query_as::<_, OneTimeToken>(
        "INSERT INTO tokens (email, token_type, token_hash)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(email)
    .bind(token_type)
    .bind(token_hash)
    .fetch_one(pool)
    .await
}

pub async fn find_latest_unused(
    pool: &PgPool,
    email: &str,
) -> Result<Option<OneTimeToken>, sqlx::Error> {
    sqlx::query_as::<_, OneTimeToken>(
        "SELECT * FROM tokens WHERE email = $1 AND used = false
         ORDER BY created_at DESC LIMIT 1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn mark_used(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE tokens SET used = true WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// A fresh code supersedes any outstanding one for the same email.
pub async fn invalidate_for_email(pool: &PgPool, email: &str) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE tokens SET used = true WHERE email = $1 AND used = false")
        .bind(email)
        .execute(pool)
        .await?;
    Ok(())
}
