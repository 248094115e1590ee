// crates/field/src/utils/location_index_stub.rs

use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use shared_kernel::domain::value_objects::{Distance, GeoPoint};
use shared_kernel::errors::{DomainError, Result};
use crate::domain::repositories::{ensure_indexable, LocationIndex};
use crate::domain::value_objects::FieldId;

// --- STUB LOCATION INDEX (Redis GEO) ---
#[derive(Default)]
pub struct LocationIndexStub {
    pub entries: Mutex<HashMap<FieldId, GeoPoint>>,
    pub error_to_return: Mutex<Option<DomainError>>,
    /// Ids renvoyés tels quels à la place du calcul (simulation d'index divergent)
    pub ids_to_return: Mutex<Option<Vec<FieldId>>>,
}

impl LocationIndexStub {
    pub fn fail_with(&self, err: DomainError) {
        *self.error_to_return.lock().unwrap() = Some(err);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: &FieldId) -> Option<GeoPoint> {
        self.entries.lock().unwrap().get(id).copied()
    }

    fn check_error(&self) -> Result<()> {
        match self.error_to_return.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl LocationIndex for LocationIndexStub {
    async fn upsert(&self, id: &FieldId, point: GeoPoint) -> Result<()> {
        ensure_indexable(&point)?;
        self.check_error()?;
        self.entries.lock().unwrap().insert(*id, point);
        Ok(())
    }

    async fn remove(&self, id: &FieldId) -> Result<bool> {
        self.check_error()?;
        Ok(self.entries.lock().unwrap().remove(id).is_some())
    }

    async fn radius_query(&self, center: GeoPoint, radius: Distance, limit: usize) -> Result<Vec<FieldId>> {
        ensure_indexable(&center)?;
        self.check_error()?;

        if let Some(ids) = self.ids_to_return.lock().unwrap().clone() {
            return Ok(ids.into_iter().take(limit).collect());
        }

        let mut hits: Vec<(FieldId, f64)> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .map(|(id, point)| (*id, center.distance_to(point)))
            .filter(|(_, distance)| *distance <= radius.meters())
            .collect();

        hits.sort_by(|a, b| a.1.total_cmp(&b.1));
        Ok(hits.into_iter().take(limit).map(|(id, _)| id).collect())
    }
}
