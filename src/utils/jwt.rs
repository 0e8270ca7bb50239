use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    pub exp: usize,
}

pub fn generate_token(role: &str, secret: &str, algorithm: Algorithm) -> Result<String> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::days(30))
        .ok_or_else(|| AppError::InternalError("Failed to calculate expiration".to_string()))?
        .timestamp() as usize;

    let claims = Claims {
        sub: None,
        role: Some(role.to_string()),
        exp: expiration,
    };

    encode(
        &Header::new(algorithm),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalError(format!("Token generation failed: {}", e)))
}

pub fn decode_token(token: &str, secret: &str, algorithm: Algorithm) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(algorithm),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::Unauthorized("Token expired".to_string())
        }
        _ => AppError::Unauthorized("Invalid token".to_string()),
    })
}

/// Reads the signing settings from the environment on each call; presence
/// is validated once at startup by `AppConfig::from_env`.
pub fn verify_token(token: &str) -> Result<Claims> {
    let secret = env::var("JWT_SECRET")
        .map_err(|_| AppError::ConfigError("JWT_SECRET not set".to_string()))?;

    let algorithm = Algorithm::from_str(
        &env::var("JWT_ALGORITHM").unwrap_or_else(|_| "HS256".to_string()),
    )
    .map_err(|_| AppError::ConfigError("Invalid JWT_ALGORITHM value".to_string()))?;

    decode_token(token, &secret, algorithm)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn round_trip_preserves_role() {
        let token = generate_token("ADMIN", SECRET, Algorithm::HS256).unwrap();
        let claims = decode_token(&token, SECRET, Algorithm::HS256).unwrap();
        assert_eq!(claims.role.as_deref(), Some("ADMIN"));
    }

    #[test]
    fn wrong_secret_is_unauthorized() {
        let token = generate_token("ADMIN", SECRET, Algorithm::HS256).unwrap();
        let err = decode_token(&token, "other-secret", Algorithm::HS256).unwrap_err();
        match err {
            AppError::Unauthorized(msg) => assert_eq!(msg, "Invalid token"),
            other => panic!("expected Unauthorized, got {:?}", other),
        }
    }

    #[test]
    fn garbage_token_is_unauthorized() {
        let err = decode_token("not-a-token", SECRET, Algorithm::HS256).unwrap_err();
        match err {
            AppError::Unauthorized(msg) => assert_eq!(msg, "Invalid token"),
            other => panic!("expected Unauthorized, got {:?}", other),
        }
    }

    #[test]
    fn expired_token_has_distinct_message() {
        let expired = chrono::Utc::now().timestamp() as usize - 7200;
        let claims = Claims {
            sub: None,
            role: Some("ADMIN".to_string()),
            exp: expired,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let err = decode_token(&token, SECRET, Algorithm::HS256).unwrap_err();
        match err {
            AppError::Unauthorized(msg) => assert_eq!(msg, "Token expired"),
            other => panic!("expected Unauthorized, got {:?}", other),
        }
    }

    #[test]
    fn missing_role_claim_decodes_as_none() {
        #[derive(Serialize)]
        struct Bare {
            exp: usize,
        }
        let exp = chrono::Utc::now().timestamp() as usize + 3600;
        let token = encode(
            &Header::new(Algorithm::HS256),
            &Bare { exp },
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let claims = decode_token(&token, SECRET, Algorithm::HS256).unwrap();
        assert!(claims.role.is_none());
    }
}
