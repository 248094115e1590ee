// crates/field/src/domain/value_objects/field_id.rs

use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::domain::Identifier;
use shared_kernel::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifiant d'un terrain, basé sur UUID v7.
/// C'est aussi le membre stocké dans l'index de localisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(Uuid);

impl FieldId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Validation de forme, à faire avant d'entrer dans le cœur
    pub fn try_new(id: impl Into<String>) -> Result<Self> {
        let id = Self::from_str(&id.into())?;
        id.validate()?;
        Ok(id)
    }
}

impl Identifier for FieldId {
    fn as_uuid(&self) -> Uuid {
        self.0
    }

    fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl ValueObject for FieldId {
    fn validate(&self) -> Result<()> {
        if self.0.is_nil() {
            return Err(DomainError::Validation {
                field: "field_id",
                reason: "Field ID cannot be nil".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for FieldId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for FieldId {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| DomainError::Validation {
                field: "field_id",
                reason: format!("'{}' is not a valid UUID for FieldId", s),
            })
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique_and_ordered() {
        let a = FieldId::new();
        let b = FieldId::new();
        assert_ne!(a, b);
        assert!(a < b, "UUID v7 doit être croissant dans le temps");
    }

    #[test]
    fn test_try_new_rejects_malformed_ids() {
        // Ancien format ObjectId (24 hex) : plus accepté
        for bad in ["", "abc", "5f1b2c3d4e5f6a7b8c9d0e1f", "00000000-0000-0000-0000-000000000000"] {
            assert!(
                matches!(FieldId::try_new(bad), Err(DomainError::Validation { field: "field_id", .. })),
                "'{bad}' devrait être refusé"
            );
        }
    }

    #[test]
    fn test_string_form_round_trips() {
        let id = FieldId::new();
        let parsed = FieldId::try_new(id.as_string()).unwrap();
        assert_eq!(parsed, id);
        assert_eq!(id.to_string(), id.as_string());
    }
}
