// crates/shared_kernel/src/domain/value_objects/geo_point.rs

use serde::{Deserialize, Serialize};
use crate::domain::value_objects::{Latitude, Longitude, ValueObject};
use crate::errors::{DomainError, Result};

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Point WGS84. L'ordre des arguments est toujours (lon, lat),
/// comme GeoJSON, GEOADD et ST_MakePoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    longitude: Longitude,
    latitude: Latitude,
}

impl GeoPoint {
    pub fn try_new(lon: f64, lat: f64) -> Result<Self> {
        Ok(Self {
            longitude: Longitude::try_new(lon)?,
            latitude: Latitude::try_new(lat)?,
        })
    }

    pub fn from_raw(lon: f64, lat: f64) -> Self {
        Self {
            longitude: Longitude::from_raw(lon),
            latitude: Latitude::from_raw(lat),
        }
    }

    // --- Getters ---
    pub fn lon(&self) -> f64 { self.longitude.value() }
    pub fn lat(&self) -> f64 { self.latitude.value() }

    /// Distance orthodromique (haversine) en mètres
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        let phi1 = self.lat().to_radians();
        let phi2 = other.lat().to_radians();

        let delta_phi = (other.lat() - self.lat()).to_radians();
        let delta_lambda = (other.lon() - self.lon()).to_radians();

        let a = (delta_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_METERS * c
    }
}

impl ValueObject for GeoPoint {
    fn validate(&self) -> Result<()> {
        self.longitude.validate()?;
        self.latitude.validate()?;
        Ok(())
    }
}

impl std::str::FromStr for GeoPoint {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 2 {
            return Err(DomainError::Validation {
                field: "geopoint",
                reason: "Format 'lon,lat' expected".to_string()
            });
        }

        let lon = Longitude::from_str(parts[0])?;
        let lat = Latitude::from_str(parts[1])?;

        Ok(Self { longitude: lon, latitude: lat })
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lon(), self.lat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_try_new_accepts_bounds() {
        assert!(GeoPoint::try_new(-180.0, -90.0).is_ok());
        assert!(GeoPoint::try_new(180.0, 90.0).is_ok());
        assert!(GeoPoint::try_new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_try_new_rejects_invalid_coordinates() {
        let cases = [(200.0, 10.0), (10.0, -95.0), (f64::NAN, 0.0), (0.0, f64::INFINITY)];

        for (lon, lat) in cases {
            let result = GeoPoint::try_new(lon, lat);
            assert!(
                matches!(result, Err(DomainError::InvalidCoordinate { .. })),
                "({lon}, {lat}) devrait être refusé"
            );
        }
    }

    #[test]
    fn test_argument_order_is_lon_lat() {
        // San Francisco : lon négative, lat positive
        let sf = GeoPoint::try_new(-122.42, 37.77).unwrap();
        assert_eq!(sf.lon(), -122.42);
        assert_eq!(sf.lat(), 37.77);

        // Inverser les axes doit échouer (lat = -122 hors bornes)
        assert!(GeoPoint::try_new(37.77, -122.42).is_err());
    }

    #[test]
    fn test_distance_paris_lyon() {
        let paris = GeoPoint::try_new(2.3522, 48.8566).unwrap();
        let lyon = GeoPoint::try_new(4.8357, 45.7640).unwrap();

        let km = paris.distance_to(&lyon) / 1000.0;
        assert!((390.0..=395.0).contains(&km), "distance inattendue : {km}");
        assert_eq!(paris.distance_to(&paris), 0.0);
    }

    #[test]
    fn test_from_str_and_display_round_trip() {
        let point = GeoPoint::from_str(" -122.42 , 37.77 ").unwrap();
        assert_eq!(point.to_string(), "-122.42,37.77");
        assert!(GeoPoint::from_str("1.0").is_err());
    }
}
