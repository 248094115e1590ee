// crates/field/src/infrastructure/redis/redis_location_index.rs

use async_trait::async_trait;
use fred::clients::Pool;
use fred::interfaces::{GeoInterface, SortedSetsInterface};
use fred::types::Value;
use fred::types::geo::{GeoPosition, GeoUnit, GeoValue};
use fred::types::SortOrder;
use shared_kernel::domain::value_objects::{Distance, GeoPoint};
use shared_kernel::domain::Identifier;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::redis::FredErrorExt;
use crate::domain::repositories::{ensure_indexable, LocationIndex};
use crate::domain::value_objects::FieldId;

pub const DEFAULT_GEO_KEY: &str = "fields";

/// Index GEO Redis : un sorted set, membre = id du terrain.
/// GEOADD / GEOSEARCH prennent toujours la longitude en premier.
pub struct RedisLocationIndex {
    pool: Pool,
    key: String,
}

impl RedisLocationIndex {
    pub fn new(pool: Pool) -> Self {
        Self::with_key(pool, DEFAULT_GEO_KEY)
    }

    pub fn with_key(pool: Pool, key: impl Into<String>) -> Self {
        Self { pool, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// ZCARD : nombre d'entrées, sert aussi de sonde de connexion
    pub async fn entry_count(&self) -> Result<u64> {
        self.pool
            .zcard::<u64, _>(self.key.as_str())
            .await
            .map_index("GeoIndexCount")
    }
}

#[async_trait]
impl LocationIndex for RedisLocationIndex {
    async fn upsert(&self, id: &FieldId, point: GeoPoint) -> Result<()> {
        // GEOADD refuse |lat| > 85.05112878 : on le dit avant l'appel
        ensure_indexable(&point)?;

        let value = GeoValue {
            coordinates: GeoPosition {
                longitude: point.lon(),
                latitude: point.lat(),
            },
            member: Value::from(id.as_string()),
        };

        // 0 = membre existant mis à jour, 1 = ajout
        let _added: i64 = self.pool
            .geoadd(self.key.as_str(), None, false, value)
            .await
            .map_index("GeoIndexUpsert")?;

        Ok(())
    }

    async fn remove(&self, id: &FieldId) -> Result<bool> {
        let removed: i64 = self.pool
            .zrem(self.key.as_str(), id.as_string())
            .await
            .map_index("GeoIndexRemove")?;

        Ok(removed > 0)
    }

    async fn radius_query(&self, center: GeoPoint, radius: Distance, limit: usize) -> Result<Vec<FieldId>> {
        ensure_indexable(&center)?;

        let members: Vec<String> = self.pool
            .geosearch(
                self.key.as_str(),
                None,
                Some(GeoPosition {
                    longitude: center.lon(),
                    latitude: center.lat(),
                }),
                Some((radius.miles(), GeoUnit::Miles)),
                None,
                Some(SortOrder::Asc),
                Some((limit as u64, false)),
                false,
                false,
                false,
            )
            .await
            .map_index("GeoIndexRadiusQuery")?;

        // Membre illisible = divergence, on l'ignore comme un id absent du store
        Ok(members
            .into_iter()
            .filter_map(|member| match member.parse::<FieldId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    tracing::warn!(%member, key = %self.key, "Unparsable member in geo index, skipped");
                    None
                }
            })
            .collect())
    }
}
