// crates/shared-kernel/src/infrastructure/postgres/utils/postgres_migrations.rs

use std::path::Path;
use sqlx::migrate::Migrator;

/// Applique les migrations SQLx d'un dossier (résolu à l'exécution, pas à la compilation)
pub async fn run_postgres_migrations_from(pool: &sqlx::PgPool, dir: impl AsRef<Path>) -> anyhow::Result<()> {
    let migrator = Migrator::new(dir.as_ref()).await?;
    migrator.run(pool).await?;
    tracing::info!(path = %dir.as_ref().display(), "Postgres migrations applied");
    Ok(())
}
