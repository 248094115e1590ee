// crates/field/tests/common/mod.rs
#![allow(dead_code)]

use std::sync::Arc;
use shared_kernel::domain::value_objects::GeoPoint;
use shared_kernel::infrastructure::postgres::utils::PostgresTestContext;
use shared_kernel::infrastructure::redis::utils::RedisTestContext;
use field::domain::builders::FieldBuilder;
use field::domain::entities::Field;
use field::domain::value_objects::{Address, FieldAttributes};
use field::infrastructure::postgres::repositories::PostgresFieldRepository;
use field::infrastructure::postgres::utils::run_postgres_migrations;
use field::infrastructure::redis::RedisLocationIndex;

pub async fn setup_postgres() -> (PostgresTestContext, Arc<PostgresFieldRepository>) {
    let ctx = PostgresTestContext::builder().build().await;
    run_postgres_migrations(&ctx.pool()).await.expect("Field migrations failed");
    let repo = Arc::new(PostgresFieldRepository::new(ctx.pool()));
    (ctx, repo)
}

pub async fn setup_redis() -> (RedisTestContext, Arc<RedisLocationIndex>) {
    let ctx = RedisTestContext::builder().build().await;
    let index = Arc::new(RedisLocationIndex::with_key(ctx.pool(), "fields:test"));
    (ctx, index)
}

pub fn field_at(lon: f64, lat: f64, name: &str, city: &str) -> Field {
    FieldBuilder::new(GeoPoint::try_new(lon, lat).unwrap())
        .with_attributes(FieldAttributes {
            name: name.to_string(),
            sports: vec!["soccer".to_string()],
            address: Address { city: city.to_string(), ..Default::default() },
            is_public: true,
            ..Default::default()
        })
        .build()
}
