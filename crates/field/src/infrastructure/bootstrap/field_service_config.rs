// crates/field/src/infrastructure/bootstrap/field_service_config.rs

use crate::application::geo_search::DEFAULT_MAX_RESULTS;
use crate::infrastructure::redis::DEFAULT_GEO_KEY;

/// Réglages propres au service, hors connexions (voir les context builders)
#[derive(Debug, Clone)]
pub struct FieldServiceConfig {
    pub geo_index_key: String,
    pub search_max_results: usize,
    pub token_secret: Option<String>,
    /// Applique les migrations embarquées au démarrage
    pub run_migrations: bool,
}

impl Default for FieldServiceConfig {
    fn default() -> Self {
        Self {
            geo_index_key: DEFAULT_GEO_KEY.to_string(),
            search_max_results: DEFAULT_MAX_RESULTS,
            token_secret: None,
            run_migrations: false,
        }
    }
}

impl FieldServiceConfig {
    /// Lit `{prefix}_GEO_INDEX_KEY`, `{prefix}_SEARCH_MAX_RESULTS`, `{prefix}_TOKEN_SECRET`
    /// et `{prefix}_DB_RUN_MIGRATIONS` (`true` / `1`)
    pub fn from_env(prefix: &str) -> Self {
        let var = |name: &str| std::env::var(format!("{prefix}_{name}")).ok();
        let defaults = Self::default();

        Self {
            geo_index_key: var("GEO_INDEX_KEY")
                .filter(|k| !k.is_empty())
                .unwrap_or(defaults.geo_index_key),
            search_max_results: var("SEARCH_MAX_RESULTS")
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.search_max_results),
            token_secret: var("TOKEN_SECRET").filter(|s| !s.is_empty()),
            run_migrations: var("DB_RUN_MIGRATIONS")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1"))
                .unwrap_or(defaults.run_migrations),
        }
    }

    pub fn with_geo_index_key(mut self, key: impl Into<String>) -> Self {
        self.geo_index_key = key.into();
        self
    }

    pub fn with_search_max_results(mut self, max: usize) -> Self {
        self.search_max_results = max;
        self
    }

    pub fn with_token_secret(mut self, secret: impl Into<String>) -> Self {
        self.token_secret = Some(secret.into());
        self
    }

    pub fn with_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_defaults_and_overrides() {
        // Préfixe dédié : pas d'interférence avec les autres tests
        let prefix = "FIELDCFGTEST";
        std::env::remove_var("FIELDCFGTEST_GEO_INDEX_KEY");
        std::env::set_var("FIELDCFGTEST_SEARCH_MAX_RESULTS", "not-a-number");
        std::env::set_var("FIELDCFGTEST_TOKEN_SECRET", "s3cret");

        let cfg = FieldServiceConfig::from_env(prefix);
        assert_eq!(cfg.geo_index_key, "fields");
        assert_eq!(cfg.search_max_results, 100);
        assert_eq!(cfg.token_secret.as_deref(), Some("s3cret"));
        assert!(!cfg.run_migrations);

        std::env::set_var("FIELDCFGTEST_GEO_INDEX_KEY", "fields:v2");
        std::env::set_var("FIELDCFGTEST_SEARCH_MAX_RESULTS", "25");
        std::env::set_var("FIELDCFGTEST_DB_RUN_MIGRATIONS", "TRUE");

        let cfg = FieldServiceConfig::from_env(prefix);
        assert_eq!(cfg.geo_index_key, "fields:v2");
        assert_eq!(cfg.search_max_results, 25);
        assert!(cfg.run_migrations);
    }
}
