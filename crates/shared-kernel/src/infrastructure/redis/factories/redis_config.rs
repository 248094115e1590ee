// crates/shared-kernel/src/infrastructure/redis/factories/redis_config.rs

use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct RedisConfig {
    pub pool_size: usize,
    pub connection_timeout: Duration,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            pool_size: 8,
            connection_timeout: Duration::from_secs(5),
        }
    }
}

impl RedisConfig {
    pub fn from_env(prefix: &str) -> Self {
        let defaults = Self::default();
        let read = |name: &str| -> Option<u64> {
            std::env::var(format!("{prefix}_REDIS_{name}")).ok()?.trim().parse().ok()
        };

        Self {
            // Un pool vide ne sert à rien, on retombe sur la valeur par défaut
            pool_size: read("POOL_SIZE")
                .filter(|size| *size > 0)
                .map(|size| size as usize)
                .unwrap_or(defaults.pool_size),
            connection_timeout: read("CONNECT_TIMEOUT")
                .map(Duration::from_secs)
                .unwrap_or(defaults.connection_timeout),
        }
    }
}
