use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use infra::repos::scorer_sessions;

use crate::auth::Claims;
use crate::error::AppError;
use crate::state::AppState;

pub struct IssuedSession {
    pub session_id: Uuid,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Verify credentials and open a scorer session.
pub async fn start_session(state: &AppState, email: &str, password: &str) -> Result<IssuedSession, AppError> {
    let email = email.trim().to_lowercase();
    if email.is_empty() || password.is_empty() {
        return Err(AppError::BadRequest("email and password are required".to_string()));
    }

    // bcrypt verification blocks the thread
    let verifier = Arc::clone(state.credentials());
    let (identity, secret) = (email.clone(), password.to_string());
    let valid = tokio::task::spawn_blocking(move || verifier.verify(&identity, &secret))
        .await
        .map_err(|e| AppError::Internal(format!("credential check failed: {e}")))?;

    if !valid {
        tracing::info!("Rejected scorer login for {}", email);
        return Err(AppError::Unauthorized("Invalid email or password".to_string()));
    }

    let issued_at = Utc::now();
    let expires_at = issued_at + Duration::minutes(state.jwt_service().expiration_minutes() as i64);
    let session = scorer_sessions::create(&state.db, &email, expires_at).await?;

    let claims = Claims::new(session.id, &email, issued_at, session.expires_at);
    let token = state.jwt_service().create_token(&claims)?;

    tracing::info!("Scorer {} signed in (session {})", email, session.id);

    Ok(IssuedSession {
        session_id: session.id,
        token,
        expires_at: session.expires_at,
    })
}

/// Revoke the session behind `claims`. Returns false if it was already gone.
pub async fn end_session(state: &AppState, claims: &Claims) -> Result<bool, AppError> {
    let session_id = Uuid::parse_str(&claims.sid)
        .map_err(|_| AppError::Unauthorized("Invalid session".to_string()))?;

    let revoked = scorer_sessions::revoke(&state.db, session_id).await?;
    if revoked {
        tracing::info!("Scorer {} signed out (session {})", claims.sub, session_id);
    }

    Ok(revoked)
}
