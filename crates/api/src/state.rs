use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::{AuthConfig, CredentialVerifier, JwtService, StaticCredentialVerifier};
use crate::config::ScoringConfig;
use crate::standings::ColumnLayouts;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    auth_config: AuthConfig,
    jwt_service: JwtService,
    credentials: Arc<dyn CredentialVerifier>,
    scoring: ScoringConfig,
    layouts: Arc<ColumnLayouts>,
}

impl AppState {
    pub fn new(
        db: PgPool,
        auth_config: AuthConfig,
        credentials: Arc<dyn CredentialVerifier>,
        scoring: ScoringConfig,
    ) -> Self {
        let jwt_service = JwtService::new(&auth_config);

        Self {
            db,
            auth_config,
            jwt_service,
            credentials,
            scoring,
            layouts: Arc::new(ColumnLayouts::default()),
        }
    }

    pub fn from_env(db: PgPool) -> anyhow::Result<Self> {
        let auth_config = AuthConfig::from_env()?;
        let credentials = StaticCredentialVerifier::parse(&auth_config.scorer_credentials)?;
        if credentials.is_empty() {
            tracing::warn!("SCORER_CREDENTIALS is empty; nobody can sign in to record results");
        } else {
            tracing::info!("Loaded {} scorer credential(s)", credentials.len());
        }
        let scoring = ScoringConfig::from_env()?;

        Ok(Self::new(db, auth_config, Arc::new(credentials), scoring))
    }

    pub fn auth_config(&self) -> &AuthConfig {
        &self.auth_config
    }

    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    pub fn credentials(&self) -> &Arc<dyn CredentialVerifier> {
        &self.credentials
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    pub fn layouts(&self) -> &ColumnLayouts {
        &self.layouts
    }
}
