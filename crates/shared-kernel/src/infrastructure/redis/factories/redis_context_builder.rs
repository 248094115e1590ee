// crates/shared-kernel/src/infrastructure/redis/factories/redis_context_builder.rs

use crate::errors::AppResult;
use crate::infrastructure::redis::factories::{RedisConfig, RedisContext};

pub struct RedisContextBuilder {
    pub(crate) url: String,
    pub(crate) config: RedisConfig,
}

impl Default for RedisContextBuilder {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".to_string(),
            config: RedisConfig::default(),
        }
    }
}

impl RedisContextBuilder {
    /// `None` si `{prefix}_REDIS_URL` est absente : Redis est optionnel
    pub fn from_env(prefix: &str) -> Option<Self> {
        let url = std::env::var(format!("{prefix}_REDIS_URL")).ok()?;
        Some(Self {
            url,
            config: RedisConfig::from_env(prefix),
        })
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_config(mut self, config: RedisConfig) -> Self {
        self.config = config;
        self
    }

    pub async fn build(self) -> AppResult<RedisContext> {
        RedisContext::restore(self).await
    }
}
