// crates/shared-kernel/src/infrastructure/redis/utils/redis_test_builder.rs

use crate::infrastructure::redis::factories::RedisConfig;
use crate::infrastructure::redis::utils::RedisTestContext;

// GEOSEARCH demande Redis >= 6.2
const DEFAULT_TAG: &str = "7.2-alpine";
const REDIS_PORT: u16 = 6379;

pub struct RedisTestContextBuilder {
    pub(crate) image_tag: String,
    pub(crate) config: RedisConfig,
}

impl RedisTestContextBuilder {
    pub(crate) fn new() -> Self {
        Self {
            image_tag: DEFAULT_TAG.to_string(),
            // Les tests n'ont pas besoin d'un gros pool
            config: RedisConfig { pool_size: 2, ..RedisConfig::default() },
        }
    }

    pub(crate) fn port(&self) -> u16 {
        REDIS_PORT
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.image_tag = tag.to_string();
        self
    }

    pub fn with_config(mut self, config: RedisConfig) -> Self {
        self.config = config;
        self
    }

    pub async fn build(self) -> RedisTestContext {
        RedisTestContext::restore(self).await
    }
}
