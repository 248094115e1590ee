// crates/shared_kernel/src/domain/value_objects/distance.rs

use serde::{Deserialize, Serialize};
use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};

pub const METERS_PER_MILE: f64 = 1_609.344;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Miles,
    Kilometers,
    Meters,
}

impl DistanceUnit {
    fn meters_per_unit(&self) -> f64 {
        match self {
            Self::Miles => METERS_PER_MILE,
            Self::Kilometers => 1_000.0,
            Self::Meters => 1.0,
        }
    }
}

/// Rayon de recherche. Stocké en miles : c'est l'unité qui circule jusqu'à l'index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    miles: f64,
}

impl Distance {
    pub fn try_new(value: f64, unit: DistanceUnit) -> Result<Self> {
        // On valide la valeur saisie avant conversion pour remonter la valeur d'origine
        if !value.is_finite() || value <= 0.0 {
            return Err(DomainError::InvalidRadius { radius: value });
        }
        let distance = Self {
            miles: value * unit.meters_per_unit() / METERS_PER_MILE,
        };
        distance.validate()?;
        Ok(distance)
    }

    pub fn try_from_miles(miles: f64) -> Result<Self> {
        Self::try_new(miles, DistanceUnit::Miles)
    }

    pub fn miles(&self) -> f64 {
        self.miles
    }

    pub fn meters(&self) -> f64 {
        self.miles * METERS_PER_MILE
    }
}

impl ValueObject for Distance {
    fn validate(&self) -> Result<()> {
        if !self.miles.is_finite() || self.miles <= 0.0 {
            return Err(DomainError::InvalidRadius { radius: self.miles });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_must_be_strictly_positive() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Distance::try_from_miles(bad),
                Err(DomainError::InvalidRadius { .. })
            ));
        }
    }

    #[test]
    fn test_conversions_to_miles() {
        let one_mile = Distance::try_new(1_609.344, DistanceUnit::Meters).unwrap();
        assert!((one_mile.miles() - 1.0).abs() < 1e-9);

        let ten_km = Distance::try_new(10.0, DistanceUnit::Kilometers).unwrap();
        assert!((ten_km.miles() - 6.213_711_922).abs() < 1e-6);
        assert!((ten_km.meters() - 10_000.0).abs() < 1e-6);
    }
}
