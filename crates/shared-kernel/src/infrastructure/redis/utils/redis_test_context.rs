// crates/shared-kernel/src/infrastructure/redis/utils/redis_test_context.rs

use fred::clients::Pool;
use fred::interfaces::ClientLike;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::redis::Redis as RedisImage;
use crate::infrastructure::redis::factories::RedisContext;
use crate::infrastructure::redis::utils::RedisTestContextBuilder;

/// Redis jetable : le container vit aussi longtemps que le contexte
pub struct RedisTestContext {
    context: RedisContext,
    _container: ContainerAsync<RedisImage>,
}

impl RedisTestContext {
    pub fn builder() -> RedisTestContextBuilder {
        RedisTestContextBuilder::new()
    }

    pub fn context(&self) -> &RedisContext {
        &self.context
    }

    pub fn pool(&self) -> Pool {
        self.context.pool()
    }

    pub fn url(&self) -> String {
        self.context.url()
    }

    /// Vide toutes les clés entre deux scénarios
    pub async fn flush(&self) {
        let _: () = self.context.pool().flushall(false).await.expect("FLUSHALL failed");
    }

    pub(crate) async fn restore(builder: RedisTestContextBuilder) -> Self {
        let container = RedisImage::default()
            .with_tag(&builder.image_tag)
            .start()
            .await
            .expect("Redis container did not start");

        let host = container.get_host().await.expect("container host");
        let port = container
            .get_host_port_ipv4(builder.port())
            .await
            .expect("container port");

        // builder_raw() : l'URL vient du container, pas de l'environnement
        let context = RedisContext::builder_raw()
            .with_url(format!("redis://{host}:{port}"))
            .with_config(builder.config)
            .build()
            .await
            .expect("Failed to build RedisContext for tests");

        Self { context, _container: container }
    }
}
