// crates/field/src/infrastructure/bootstrap/field_service_context.rs

use std::sync::Arc;
use shared_kernel::errors::{AppError, AppResult, DomainError, ErrorCode, Result};
use shared_kernel::infrastructure::auth::{extract_bearer, TokenClaims, TokenDecoder};
use shared_kernel::infrastructure::bootstrap::{HealthReport, HealthState, HealthStatus};
use shared_kernel::infrastructure::postgres::factories::{PostgresContext, PostgresContextBuilder};
use shared_kernel::infrastructure::redis::factories::{RedisContext, RedisContextBuilder};
use crate::application::create_field::CreateFieldUseCase;
use crate::application::delete_field::DeleteFieldUseCase;
use crate::application::geo_search::{GeoSearchCoordinator, SearchMode};
use crate::application::get_field::GetFieldUseCase;
use crate::application::search_nearby_fields::SearchNearbyFieldsUseCase;
use crate::application::update_field::UpdateFieldUseCase;
use crate::domain::repositories::{FieldRepository, LocationIndex};
use crate::infrastructure::bootstrap::FieldServiceConfig;
use crate::infrastructure::postgres::repositories::PostgresFieldRepository;
use crate::infrastructure::postgres::utils::run_postgres_migrations;
use crate::infrastructure::redis::RedisLocationIndex;

pub const SERVICE_NAME: &str = "field";
const ENV_PREFIX: &str = "FIELD";

pub struct FieldServiceContextBuilder {
    postgres: PostgresContextBuilder,
    redis: Option<RedisContextBuilder>,
    config: FieldServiceConfig,
    health: HealthState,
}

impl FieldServiceContextBuilder {
    pub fn new(postgres: PostgresContextBuilder) -> Self {
        Self {
            postgres,
            redis: None,
            config: FieldServiceConfig::default(),
            health: HealthState::new(),
        }
    }

    /// `FIELD_DB_*` obligatoires, `FIELD_REDIS_URL` optionnelle (active le mode index)
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            postgres: PostgresContext::builder(ENV_PREFIX)?,
            redis: RedisContext::builder(ENV_PREFIX),
            config: FieldServiceConfig::from_env(ENV_PREFIX),
            health: HealthState::new(),
        })
    }

    pub fn with_redis(mut self, redis: RedisContextBuilder) -> Self {
        self.redis = Some(redis);
        self
    }

    pub fn without_redis(mut self) -> Self {
        self.redis = None;
        self
    }

    pub fn with_config(mut self, config: FieldServiceConfig) -> Self {
        self.config = config;
        self
    }

    /// Partage l'état de santé avec l'appelant (qui l'expose pendant le démarrage)
    pub fn with_health(mut self, health: HealthState) -> Self {
        self.health = health;
        self
    }

    pub async fn build(self) -> AppResult<FieldServiceContext> {
        FieldServiceContext::restore(self).await
    }
}

/// Cycle de vie du service : connexions, mode de recherche, santé.
pub struct FieldServiceContext {
    postgres: PostgresContext,
    redis: Option<RedisContext>,
    index: Option<Arc<RedisLocationIndex>>,
    repo: Arc<dyn FieldRepository>,
    geo: Arc<GeoSearchCoordinator>,
    config: FieldServiceConfig,
    health: HealthState,
    token_decoder: Option<TokenDecoder>,
}

impl FieldServiceContext {
    pub fn builder() -> AppResult<FieldServiceContextBuilder> {
        FieldServiceContextBuilder::from_env()
    }

    pub fn builder_raw(postgres: PostgresContextBuilder) -> FieldServiceContextBuilder {
        FieldServiceContextBuilder::new(postgres)
    }

    async fn restore(builder: FieldServiceContextBuilder) -> AppResult<Self> {
        let health = builder.health;
        health.set(HealthStatus::Initializing);

        // 1. Store principal (obligatoire)
        let postgres = match builder.postgres.build().await {
            Ok(ctx) => ctx,
            Err(e) => {
                health.set(HealthStatus::DbConnection);
                return Err(e);
            }
        };

        if builder.config.run_migrations {
            if let Err(e) = run_postgres_migrations(&postgres.pool()).await {
                health.set(HealthStatus::Unknown);
                return Err(AppError::new(ErrorCode::InternalError, format!("Field migrations failed: {e}")));
            }
        }

        // 2. Index de localisation (optionnel)
        let redis = match builder.redis {
            Some(redis_builder) => match redis_builder.build().await {
                Ok(ctx) => Some(ctx),
                Err(e) => {
                    health.set(HealthStatus::DbConnection);
                    return Err(e);
                }
            },
            None => None,
        };

        let repo: Arc<dyn FieldRepository> = Arc::new(PostgresFieldRepository::new(postgres.pool()));
        let index = redis
            .as_ref()
            .map(|ctx| Arc::new(RedisLocationIndex::with_key(ctx.pool(), builder.config.geo_index_key.clone())));

        let geo = Arc::new(GeoSearchCoordinator::new(
            repo.clone(),
            index.clone().map(|i| i as Arc<dyn LocationIndex>),
        ));

        let token_decoder = builder.config.token_secret.as_deref().map(TokenDecoder::new);

        tracing::info!(
            service = SERVICE_NAME,
            mode = ?geo.mode(),
            geo_key = %builder.config.geo_index_key,
            "Field service ready"
        );
        health.set(HealthStatus::Ok);

        Ok(Self {
            postgres,
            redis,
            index,
            repo,
            geo,
            config: builder.config,
            health,
            token_decoder,
        })
    }

    // --- Accès ---

    pub fn mode(&self) -> SearchMode { self.geo.mode() }
    pub fn config(&self) -> &FieldServiceConfig { &self.config }
    pub fn health(&self) -> HealthState { self.health.clone() }
    pub fn postgres(&self) -> &PostgresContext { &self.postgres }
    pub fn redis(&self) -> Option<&RedisContext> { self.redis.as_ref() }
    pub fn repository(&self) -> Arc<dyn FieldRepository> { self.repo.clone() }
    pub fn geo_search(&self) -> Arc<GeoSearchCoordinator> { self.geo.clone() }

    // --- Use cases ---

    pub fn create_field(&self) -> CreateFieldUseCase {
        CreateFieldUseCase::new(self.repo.clone(), self.geo.clone())
    }

    pub fn get_field(&self) -> GetFieldUseCase {
        GetFieldUseCase::new(self.repo.clone())
    }

    pub fn update_field(&self) -> UpdateFieldUseCase {
        UpdateFieldUseCase::new(self.repo.clone(), self.geo.clone())
    }

    pub fn delete_field(&self) -> DeleteFieldUseCase {
        DeleteFieldUseCase::new(self.repo.clone(), self.geo.clone())
    }

    pub fn search_nearby_fields(&self) -> SearchNearbyFieldsUseCase {
        SearchNearbyFieldsUseCase::new(self.geo.clone())
            .with_default_max_results(self.config.search_max_results)
    }

    // --- Santé ---

    /// Aller-retour vers chaque store ; met à jour l'état de santé
    pub async fn ping(&self) -> HealthReport {
        let status = match self.probe().await {
            Ok(()) => HealthStatus::Ok,
            Err(e) if e.code.is_server_error() => {
                tracing::warn!(error = %e, "Health probe failed");
                HealthStatus::DbConnection
            }
            Err(e) => {
                tracing::error!(error = %e, "Health probe failed unexpectedly");
                HealthStatus::Unknown
            }
        };

        self.health.set(status);
        self.health.report(SERVICE_NAME)
    }

    async fn probe(&self) -> AppResult<()> {
        self.postgres.ping().await?;
        if let Some(index) = &self.index {
            index.entry_count().await?;
        }
        Ok(())
    }

    // --- Auth ---

    /// Décode `Authorization: Bearer <jwt>` avec le secret configuré
    pub fn authenticate(&self, authorization: &str) -> Result<TokenClaims> {
        let decoder = self.token_decoder.as_ref().ok_or_else(|| {
            DomainError::InvalidToken("Token secret is not configured".to_string())
        })?;
        decoder.decode(extract_bearer(authorization)?)
    }

    pub async fn close(&self) {
        if let Some(redis) = &self.redis {
            redis.close().await;
        }
        self.postgres.close().await;
        tracing::info!(service = SERVICE_NAME, "Field service closed");
    }
}
