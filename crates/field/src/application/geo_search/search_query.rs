// crates/field/src/application/geo_search/search_query.rs

use shared_kernel::domain::value_objects::{Distance, DistanceUnit};
use shared_kernel::errors::Result;

pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Recherche de proximité telle que reçue de la couche externe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchQuery {
    pub center_longitude: f64,
    pub center_latitude: f64,
    pub radius: f64,
    pub unit: DistanceUnit,
    pub max_results: usize,
}

impl SearchQuery {
    pub fn new(center_longitude: f64, center_latitude: f64, radius: f64) -> Self {
        Self {
            center_longitude,
            center_latitude,
            radius,
            unit: DistanceUnit::Miles,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_unit(mut self, unit: DistanceUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Rayon converti en miles, l'unité attendue par l'index
    pub fn radius_miles(&self) -> Result<f64> {
        Ok(Distance::try_new(self.radius, self.unit)?.miles())
    }
}
