// crates/shared_kernel/src/domain/value_objects/geo_json_point.rs

use serde::{Deserialize, Serialize};
use crate::domain::value_objects::GeoPoint;
use crate::errors::{DomainError, Result};

const POINT_TYPE: &str = "Point";

/// Forme GeoJSON d'un point : `{"type":"Point","coordinates":[lon, lat]}`.
/// Utilisée aux frontières (DTO, payloads), jamais dans le domaine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonPoint {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<f64>,
}

impl From<GeoPoint> for GeoJsonPoint {
    fn from(point: GeoPoint) -> Self {
        Self {
            kind: POINT_TYPE.to_string(),
            coordinates: vec![point.lon(), point.lat()],
        }
    }
}

impl TryFrom<GeoJsonPoint> for GeoPoint {
    type Error = DomainError;

    fn try_from(value: GeoJsonPoint) -> Result<Self> {
        if value.kind != POINT_TYPE {
            return Err(DomainError::Validation {
                field: "location.type",
                reason: format!("Expected 'Point', got '{}'", value.kind),
            });
        }

        match value.coordinates.as_slice() {
            [lon, lat] => GeoPoint::try_new(*lon, *lat),
            other => Err(DomainError::Validation {
                field: "location.coordinates",
                reason: format!("Expected [longitude, latitude], got {} values", other.len()),
            }),
        }
    }
}
