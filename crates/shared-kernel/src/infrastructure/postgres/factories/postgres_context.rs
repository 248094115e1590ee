// crates/shared-kernel/src/infrastructure/postgres/factories/postgres_context.rs

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::postgres::factories::{PostgresConfig, PostgresContextBuilder};

/// Pool Postgres partagé par les repositories d'un service
pub struct PostgresContext {
    pool: PgPool,
    url: String,
    config: PostgresConfig,
}

impl PostgresContext {
    pub fn builder(prefix: &str) -> AppResult<PostgresContextBuilder> {
        PostgresContextBuilder::from_env(prefix)
    }

    pub fn builder_raw() -> PostgresContextBuilder {
        PostgresContextBuilder::default()
    }

    pub fn pool(&self) -> PgPool {
        self.pool.clone()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn config(&self) -> &PostgresConfig {
        &self.config
    }

    /// Aller-retour minimal vers la base, utilisé par le suivi de santé
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub(crate) async fn restore(builder: PostgresContextBuilder) -> AppResult<Self> {
        let PostgresContextBuilder { url, config } = builder;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.acquire_timeout)
            .idle_timeout(config.idle_timeout)
            .connect(&url)
            .await
            .map_err(|e| AppError::new(ErrorCode::ServiceUnavailable, format!("Postgres connection failed: {e}")))?;

        tracing::info!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Postgres pool ready"
        );

        Ok(Self { pool, url, config })
    }
}
