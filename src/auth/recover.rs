use chrono::{Duration, Utc};
use rand::Rng;
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use subtle::ConstantTimeEq;

use crate::config::Config;
use crate::db;
use crate::error::AppError;
use crate::models::TokenType;

/// Code alphabet without ambiguous characters (no O/0, I/1/l).
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

pub fn hash_code(code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code.as_bytes());
    hex::encode(hasher.finalize())
}

fn hashes_match(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Issues a one-time code bound to an email and purpose. Only the sha256
/// hash is stored; the plaintext is returned exactly once for out-of-band
/// delivery. Any prior unused token for the same email is invalidated.
pub async fn create(
    pool: &PgPool,
    config: &Config,
    email: &str,
    token_type: TokenType,
) -> Result<String, AppError> {
    db::tokens::invalidate_for_email(pool, email).await?;

    let code = generate_code(config.token_length);
    db::tokens::create(pool, email, token_type, &hash_code(&code)).await?;

    Ok(code)
}

enum Consume {
    Yes,
    No,
}

/// Validates and consumes the most recent unused token for the email.
/// No unused token → NOT_FOUND. Expired or mismatched → Ok(false).
/// Match → marked used, Ok(true).
pub async fn validate(
    pool: &PgPool,
    config: &Config,
    email: &str,
    code: &str,
) -> Result<bool, AppError> {
    validate_inner(pool, config, email, code, Consume::Yes).await
}

/// Non-consuming variant used by the confirmation step of the recovery UI.
pub async fn check(
    pool: &PgPool,
    config: &Config,
    email: &str,
    code: &str,
) -> Result<bool, AppError> {
    validate_inner(pool, config, email, code, Consume::No).await
}

async fn validate_inner(
    pool: &PgPool,
    config: &Config,
    email: &str,
    code: &str,
    consume: Consume,
) -> Result<bool, AppError> {
    let token = db::tokens::find_latest_unused(pool, email)
        .await?
        .ok_or_else(|| AppError::NotFound("Token não definido!".to_string()))?;

    let expires_at = token.created_at + Duration::minutes(config.token_ttl_min);
    if Utc::now() > expires_at {
        return Ok(false);
    }

    if !hashes_match(&token.token_hash, &hash_code(code)) {
        return Ok(false);
    }

    if let Consume::Yes = consume {
        db::tokens::mark_used(pool, token.id).await?;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_has_configured_length_and_alphabet() {
        let code = generate_code(8);
        assert_eq!(code.len(), 8);
        assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
    }

    #[test]
    fn hash_is_stable_and_distinguishes_codes() {
        let a = hash_code("ABCD2345");
        assert_eq!(a, hash_code("ABCD2345"));
        assert_ne!(a, hash_code("ABCD2346"));
        assert!(hashes_match(&a, &hash_code("ABCD2345")));
        assert!(!hashes_match(&a, &hash_code("ZZZZ9999")));
    }
}
