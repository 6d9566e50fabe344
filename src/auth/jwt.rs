use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::env;

/// Payload carried by the signed instructor token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("JWT configuration error: {0}")]
    Config(String),
}

pub fn create_token(instructor_id: i32, username: &str) -> Result<String, JwtError> {
    let jwt_secret =
        env::var("JWT_SECRET").map_err(|_| JwtError::Config("JWT_SECRET not set".to_string()))?;

    let now = Utc::now();
    let expires_at = now + Duration::hours(24);

    let claims = Claims {
        sub: instructor_id.to_string(),
        username: username.to_string(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .map_err(JwtError::Jwt)
}

pub fn validate_token(token: &str) -> Result<Claims, JwtError> {
    let jwt_secret =
        env::var("JWT_SECRET").map_err(|_| JwtError::Config("JWT_SECRET not set".to_string()))?;

    let validation = Validation::default();

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(JwtError::Jwt)?;

    Ok(token_data.claims)
}
