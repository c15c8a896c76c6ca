use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Role;

/// Access-token claims. Verified with `JWT_SECRET`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: Role,
    pub field: Option<Uuid>,
    pub exp: i64,
}

impl Claims {
    pub fn new(sub: Uuid, email: String, role: Role, field: Option<Uuid>, ttl_min: i64) -> Self {
        Self {
            sub,
            email,
            role,
            field,
            exp: (Utc::now() + Duration::minutes(ttl_min)).timestamp(),
        }
    }
}

/// Refresh-token claims. Verified with the distinct `JWT_REFRESH_SECRET`
/// and a longer lifetime.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RefreshClaims {
    pub sub: Uuid,
    pub exp: i64,
}

impl RefreshClaims {
    pub fn new(sub: Uuid, ttl_days: i64) -> Self {
        Self {
            sub,
            exp: (Utc::now() + Duration::days(ttl_days)).timestamp(),
        }
    }
}

pub fn encode_access(claims: &Claims, secret: &str) -> Result<String, String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("JWT encode failed: {e}"))
}

pub fn decode_access(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| format!("JWT decode failed: {e}"))
}

pub fn encode_refresh(claims: &RefreshClaims, secret: &str) -> Result<String, String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("JWT encode failed: {e}"))
}

pub fn decode_refresh(token: &str, secret: &str) -> Result<RefreshClaims, String> {
    decode::<RefreshClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| format!("JWT decode failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_round_trip() {
        let claims = Claims::new(
            Uuid::new_v4(),
            "user@example.com".to_string(),
            Role::Volunteer,
            None,
            60,
        );
        let token = encode_access(&claims, "secret-a").unwrap();
        let decoded = decode_access(&token, "secret-a").unwrap();
        assert_eq!(decoded.sub, claims.sub);
        assert_eq!(decoded.email, claims.email);
        assert_eq!(decoded.role, Role::Volunteer);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let claims = Claims::new(
            Uuid::new_v4(),
            "user@example.com".to_string(),
            Role::Admin,
            None,
            60,
        );
        let token = encode_access(&claims, "secret-a").unwrap();
        assert!(decode_access(&token, "secret-b").is_err());
    }

    #[test]
    fn refresh_token_uses_its_own_secret() {
        let claims = RefreshClaims::new(Uuid::new_v4(), 7);
        let token = encode_refresh(&claims, "refresh-secret").unwrap();
        assert!(decode_refresh(&token, "refresh-secret").is_ok());
        assert!(decode_refresh(&token, "access-secret").is_err());
    }
}
