use anyhow::{Context, Result};
use std::env;

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub session_expiration_minutes: u64,
    /// `email=bcrypt_hash` pairs separated by `;`.
    pub scorer_credentials: String,
}

impl AuthConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            session_expiration_minutes: match env::var("SESSION_EXPIRATION_MINUTES") {
                Ok(raw) => raw
                    .trim()
                    .parse()
                    .with_context(|| format!("SESSION_EXPIRATION_MINUTES must be a whole number, got '{raw}'"))?,
                Err(_) => 720,
            },
            scorer_credentials: env::var("SCORER_CREDENTIALS").unwrap_or_default(),
        })
    }
}
