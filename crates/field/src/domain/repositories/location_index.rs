// crates/field/src/domain/repositories/location_index.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::{Distance, GeoPoint};
use shared_kernel::errors::{DomainError, Result};
use crate::domain::value_objects::FieldId;

/// Borne de latitude d'un index geohash (projection Web Mercator, EPSG:900913)
pub const MAX_INDEXABLE_LATITUDE: f64 = 85.051_128_78;

/// Refuse un point hors de la zone couverte par l'index, avant toute I/O
pub fn ensure_indexable(point: &GeoPoint) -> Result<()> {
    if point.lat().abs() > MAX_INDEXABLE_LATITUDE {
        return Err(DomainError::InvalidCoordinate {
            axis: "latitude",
            reason: format!(
                "{} is outside the indexable range -{MAX_INDEXABLE_LATITUDE}..={MAX_INDEXABLE_LATITUDE}",
                point.lat()
            ),
        });
    }
    Ok(())
}

/// Index secondaire `id -> (lon, lat)` interrogeable par rayon.
/// Les erreurs I/O remontent en `DomainError::IndexWrite`.
/// Un point (ou centre) au-delà de `MAX_INDEXABLE_LATITUDE` est refusé
/// en `DomainError::InvalidCoordinate`, sans écriture.
#[async_trait]
pub trait LocationIndex: Send + Sync {
    /// Écrase l'entrée existante pour ce même id
    async fn upsert(&self, id: &FieldId, point: GeoPoint) -> Result<()>;

    /// `false` si l'entrée n'existait pas
    async fn remove(&self, id: &FieldId) -> Result<bool>;

    /// Au plus `limit` ids, du plus proche au plus lointain
    async fn radius_query(&self, center: GeoPoint, radius: Distance, limit: usize) -> Result<Vec<FieldId>>;
}
