// crates/shared-kernel/src/infrastructure/redis/factories/redis_context.rs

use fred::clients::Pool;
use fred::prelude::*;
use fred::types::Builder;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::redis::factories::{RedisConfig, RedisContextBuilder};

/// Pool fred partagé. Cloner le pool est peu coûteux (Arc interne).
pub struct RedisContext {
    pool: Pool,
    url: String,
    config: RedisConfig,
}

impl RedisContext {
    pub fn builder(prefix: &str) -> Option<RedisContextBuilder> {
        RedisContextBuilder::from_env(prefix)
    }

    pub fn builder_raw() -> RedisContextBuilder {
        RedisContextBuilder::default()
    }

    pub fn pool(&self) -> Pool {
        self.pool.clone()
    }

    pub fn url(&self) -> String {
        self.url.clone()
    }

    pub fn config(&self) -> &RedisConfig {
        &self.config
    }

    pub async fn close(&self) {
        if let Err(e) = self.pool.quit().await {
            tracing::warn!(error = %e, "Redis pool did not close cleanly");
        }
    }

    pub(crate) async fn restore(builder: RedisContextBuilder) -> AppResult<Self> {
        let RedisContextBuilder { url, config } = builder;

        let unavailable = |e: fred::error::Error| {
            AppError::new(
                ErrorCode::ServiceUnavailable,
                format!("Failed to connect to Redis at {url}: {e}"),
            )
        };

        let client_config = Config::from_url(&url).map_err(unavailable)?;
        let timeout = config.connection_timeout;

        let pool = Builder::from_config(client_config)
            .with_connection_config(|cfg| {
                cfg.connection_timeout = timeout;
                cfg.internal_command_timeout = timeout;
                // Une écriture d'index ratée est remontée à l'appelant, pas rejouée
                cfg.max_command_attempts = 1;
            })
            .set_policy(ReconnectPolicy::new_exponential(0, 100, 1000, 2))
            .build_pool(config.pool_size)
            .map_err(unavailable)?;

        pool.init().await.map_err(unavailable)?;
        pool.wait_for_connect().await.map_err(unavailable)?;

        tracing::info!(pool_size = config.pool_size, "Redis pool ready");

        Ok(Self { pool, url, config })
    }
}
