// crates/shared-kernel/src/infrastructure/postgres/factories/postgres_config.rs
use std::time::Duration;

/// Dimensionnement du pool. L'URL reste dans le builder : elle contient des secrets.
#[derive(Debug, Clone, PartialEq)]
pub struct PostgresConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Option<Duration>,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 2,
            acquire_timeout: Duration::from_secs(3),
            idle_timeout: Some(Duration::from_secs(300)),
        }
    }
}

impl PostgresConfig {
    /// Surcharge les valeurs par défaut avec `{prefix}_DB_*` quand elles sont présentes et lisibles
    pub fn from_env(prefix: &str) -> Self {
        let defaults = Self::default();
        let read = |name: &str| -> Option<u64> {
            std::env::var(format!("{prefix}_DB_{name}")).ok()?.trim().parse().ok()
        };

        Self {
            max_connections: read("MAX_CONNECTIONS").map(|v| v as u32).unwrap_or(defaults.max_connections),
            min_connections: read("MIN_CONNECTIONS").map(|v| v as u32).unwrap_or(defaults.min_connections),
            acquire_timeout: read("CONNECT_TIMEOUT").map(Duration::from_secs).unwrap_or(defaults.acquire_timeout),
            // 0 désactive la fermeture des connexions inactives
            idle_timeout: match read("IDLE_TIMEOUT") {
                Some(0) => None,
                Some(secs) => Some(Duration::from_secs(secs)),
                None => defaults.idle_timeout,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_overrides_and_falls_back() {
        std::env::set_var("PGCFGTEST_DB_MAX_CONNECTIONS", "25");
        std::env::set_var("PGCFGTEST_DB_CONNECT_TIMEOUT", "not-a-number");
        std::env::set_var("PGCFGTEST_DB_IDLE_TIMEOUT", "0");

        let config = PostgresConfig::from_env("PGCFGTEST");

        assert_eq!(config.max_connections, 25);
        assert_eq!(config.min_connections, 2);
        assert_eq!(config.acquire_timeout, Duration::from_secs(3));
        assert_eq!(config.idle_timeout, None);
    }
}
