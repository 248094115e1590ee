// crates/shared-kernel/src/infrastructure/postgres/utils/postgres_test_context_builder.rs

use crate::infrastructure::postgres::factories::PostgresConfig;
use crate::infrastructure::postgres::utils::PostgresTestContext;

// PostGIS obligatoire pour le type geography
const POSTGIS_IMAGE: (&str, &str) = ("postgis/postgis", "16-3.4-alpine");

pub struct PostgresTestContextBuilder {
    pub(crate) image: (String, String),
    pub(crate) database: String,
    pub(crate) migrations: Vec<String>,
    pub(crate) config: PostgresConfig,
}

impl PostgresTestContextBuilder {
    pub(crate) fn new() -> Self {
        Self {
            image: (POSTGIS_IMAGE.0.to_string(), POSTGIS_IMAGE.1.to_string()),
            database: "field_test".to_string(),
            migrations: Vec::new(),
            config: PostgresConfig { min_connections: 1, max_connections: 4, ..PostgresConfig::default() },
        }
    }

    /// Les dossiers sont appliqués dans l'ordre donné
    pub fn with_migrations(mut self, paths: &[&str]) -> Self {
        self.migrations.extend(paths.iter().map(|p| p.to_string()));
        self
    }

    pub fn with_database(mut self, name: &str) -> Self {
        self.database = name.to_string();
        self
    }

    pub fn with_image(mut self, name: &str, tag: &str) -> Self {
        self.image = (name.to_string(), tag.to_string());
        self
    }

    pub fn with_config(mut self, config: PostgresConfig) -> Self {
        self.config = config;
        self
    }

    pub async fn build(self) -> PostgresTestContext {
        PostgresTestContext::restore(self).await
    }
}
