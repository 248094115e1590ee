// crates/field/src/application/search_nearby_fields/search_nearby_fields_command.rs

use shared_kernel::domain::value_objects::DistanceUnit;
use shared_kernel::errors::{DomainError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct SearchNearbyFieldsCommand {
    pub longitude: f64,
    pub latitude: f64,
    pub radius: f64,
    pub unit: DistanceUnit,
    /// `None` : limite configurée du service
    pub max_results: Option<usize>,
}

impl SearchNearbyFieldsCommand {
    /// Paramètres bruts de la requête. Une coordonnée absente ou nulle
    /// est refusée ici, avant d'atteindre la recherche.
    pub fn from_params(longitude: Option<f64>, latitude: Option<f64>, radius: Option<f64>) -> Result<Self> {
        let required = |value: Option<f64>, field: &'static str| match value {
            Some(v) if v != 0.0 => Ok(v),
            _ => Err(DomainError::Validation {
                field,
                reason: "you need to have longitude and latitude".to_string(),
            }),
        };

        Ok(Self {
            longitude: required(longitude, "longitude")?,
            latitude: required(latitude, "latitude")?,
            radius: radius.unwrap_or_default(),
            unit: DistanceUnit::Miles,
            max_results: None,
        })
    }

    pub fn with_unit(mut self, unit: DistanceUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }
}
