// crates/field/src/infrastructure/postgres/utils/postgres_migrations.rs

/// Migrations embarquées à la compilation (`migrations/postgres`)
pub async fn run_postgres_migrations(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await?;
    tracing::info!("Field migrations applied");
    Ok(())
}
