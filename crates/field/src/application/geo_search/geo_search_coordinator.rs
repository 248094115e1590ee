// crates/field/src/application/geo_search/geo_search_coordinator.rs

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use shared_kernel::domain::entities::Entity;
use shared_kernel::domain::value_objects::{Distance, GeoPoint};
use shared_kernel::errors::Result;
use crate::application::geo_search::{NearbyCandidates, SearchQuery, SearchResult};
use crate::domain::entities::Field;
use crate::domain::params::FieldFilter;
use crate::domain::repositories::{FieldRepository, LocationIndex};
use crate::domain::value_objects::FieldId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Index de localisation séparé (Redis GEO) + lecture des documents
    Index,
    /// Requête géo directe sur le store (PostGIS)
    Native,
}

/// Point unique d'accès à la recherche de proximité. Le mode est fixé
/// à la construction par la présence (ou non) d'un index.
pub struct GeoSearchCoordinator {
    store: Arc<dyn FieldRepository>,
    index: Option<Arc<dyn LocationIndex>>,
}

impl GeoSearchCoordinator {
    pub fn new(store: Arc<dyn FieldRepository>, index: Option<Arc<dyn LocationIndex>>) -> Self {
        Self { store, index }
    }

    pub fn mode(&self) -> SearchMode {
        match self.index {
            Some(_) => SearchMode::Index,
            None => SearchMode::Native,
        }
    }

    /// Valide la coordonnée avant toute écriture, puis un seul upsert.
    /// En mode natif le document porte déjà sa position : validation seule.
    pub async fn index_location(&self, id: &FieldId, longitude: f64, latitude: f64) -> Result<()> {
        let point = GeoPoint::try_new(longitude, latitude)?;

        let Some(index) = &self.index else {
            return Ok(());
        };

        index.upsert(id, point).await?;
        tracing::debug!(field_id = %id, %point, "Location indexed");
        Ok(())
    }

    /// Une entrée absente n'est pas une erreur
    pub async fn remove_location(&self, id: &FieldId) -> Result<()> {
        let Some(index) = &self.index else {
            return Ok(());
        };

        if !index.remove(id).await? {
            tracing::debug!(field_id = %id, "No location entry to remove");
        }
        Ok(())
    }

    pub async fn search_nearby(
        &self,
        center_longitude: f64,
        center_latitude: f64,
        radius_miles: f64,
        limit: usize,
    ) -> Result<NearbyCandidates> {
        let radius = Distance::try_from_miles(radius_miles)?;
        let center = GeoPoint::try_new(center_longitude, center_latitude)?;

        if limit == 0 {
            return Ok(match self.mode() {
                SearchMode::Index => NearbyCandidates::Ids(Vec::new()),
                SearchMode::Native => NearbyCandidates::Documents(Vec::new()),
            });
        }

        match &self.index {
            Some(index) => {
                let ids = index.radius_query(center, radius, limit).await?;
                tracing::debug!(%center, radius_miles, hits = ids.len(), "Index radius query");
                Ok(NearbyCandidates::Ids(ids))
            }
            None => {
                let filter = FieldFilter::new().near(center, radius).limit(limit);
                let docs = self.store.find_many(&filter).await?;
                tracing::debug!(%center, radius_miles, hits = docs.len(), "Native near query");
                Ok(NearbyCandidates::Documents(docs))
            }
        }
    }

    /// Résout les candidats dans l'ordre reçu. Les ids absents du store
    /// (divergence index/store) sont ignorés, les doublons écartés.
    /// Les erreurs du store sont propagées telles quelles.
    pub async fn resolve_results<F, Fut>(&self, candidates: NearbyCandidates, fetch: F) -> Result<SearchResult>
    where
        F: Fn(FieldId) -> Fut,
        Fut: Future<Output = Result<Option<Field>>>,
    {
        let mut seen = HashSet::new();

        let fields = match candidates {
            NearbyCandidates::Documents(docs) => docs
                .into_iter()
                .filter(|f| seen.insert(*f.id()))
                .collect(),
            NearbyCandidates::Ids(ids) => {
                let mut fields = Vec::with_capacity(ids.len());
                for id in ids {
                    if !seen.insert(id) {
                        continue;
                    }
                    match fetch(id).await? {
                        Some(field) => fields.push(field),
                        None => tracing::warn!(field_id = %id, "Indexed field missing from store, skipped"),
                    }
                }
                fields
            }
        };

        Ok(SearchResult::from_fields(fields))
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResult> {
        let candidates = self
            .search_nearby(
                query.center_longitude,
                query.center_latitude,
                query.radius_miles()?,
                query.max_results,
            )
            .await?;

        let store = self.store.clone();
        self.resolve_results(candidates, |id| {
            let store = store.clone();
            async move { store.find_by_id(&id).await }
        })
        .await
    }
}
