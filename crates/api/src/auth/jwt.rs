use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AuthConfig;
use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Scorer email
    pub sid: String, // scorer_sessions.id
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(session_id: Uuid, email: &str, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: email.to_string(),
            sid: session_id.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }
}

#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_minutes: u64,
}

impl JwtService {
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            expiration_minutes: config.session_expiration_minutes,
        }
    }

    pub fn expiration_minutes(&self) -> u64 {
        self.expiration_minutes
    }

    pub fn create_token(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(e.to_string()))
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn service() -> JwtService {
        JwtService::new(&AuthConfig {
            jwt_secret: "test-secret".to_string(),
            session_expiration_minutes: 60,
            scorer_credentials: String::new(),
        })
    }

    #[test]
    fn token_carries_the_session_id() {
        let now = Utc::now();
        let session_id = Uuid::new_v4();
        let claims = Claims::new(session_id, "scorer@fest.test", now, now + Duration::minutes(60));

        let token = service().create_token(&claims).expect("token encodes");
        let decoded = service().verify_token(&token).expect("token verifies");

        assert_eq!(decoded.sid, session_id.to_string());
        assert_eq!(decoded.sub, "scorer@fest.test");
    }

    #[test]
    fn expired_token_is_rejected() {
        let issued = Utc::now() - Duration::hours(3);
        let claims = Claims::new(Uuid::new_v4(), "scorer@fest.test", issued, issued + Duration::hours(1));

        let token = service().create_token(&claims).expect("token encodes");

        assert!(matches!(service().verify_token(&token), Err(AppError::Unauthorized(_))));
    }
}
