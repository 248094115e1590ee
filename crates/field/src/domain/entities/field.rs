// crates/field/src/domain/entities/field.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::entities::{Entity, EntityMetadata};
use shared_kernel::domain::value_objects::GeoPoint;
use crate::domain::params::FieldPatch;
use crate::domain::value_objects::{FieldAttributes, FieldId};

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    id: FieldId,
    location: GeoPoint,
    attributes: FieldAttributes,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Field {
    pub(crate) fn new_from_builder(
        id: FieldId,
        location: GeoPoint,
        attributes: FieldAttributes,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            location,
            attributes,
            created_at,
            updated_at: created_at,
        }
    }

    pub fn restore(
        id: FieldId,
        location: GeoPoint,
        attributes: FieldAttributes,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self { id, location, attributes, created_at, updated_at }
    }

    // --- Getters ---

    pub fn location(&self) -> GeoPoint { self.location }
    pub fn attributes(&self) -> &FieldAttributes { &self.attributes }
    pub fn name(&self) -> &str { &self.attributes.name }
    pub fn is_public(&self) -> bool { self.attributes.is_public }

    /// Applique une modification partielle. Retourne `true` si la position a changé.
    pub fn apply_patch(&mut self, patch: &FieldPatch) -> bool {
        patch.apply_to(&mut self.attributes);

        let moved = match patch.location {
            Some(location) if location != self.location => {
                self.location = location;
                true
            }
            _ => false,
        };

        if !patch.is_empty() {
            self.updated_at = Utc::now();
        }
        moved
    }
}

impl EntityMetadata for Field {
    fn entity_name() -> &'static str {
        "Field"
    }
}

impl Entity for Field {
    type Id = FieldId;

    fn id(&self) -> &FieldId { &self.id }
    fn created_at(&self) -> DateTime<Utc> { self.created_at }
    fn updated_at(&self) -> DateTime<Utc> { self.updated_at }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::builders::FieldBuilder;

    #[test]
    fn test_apply_patch_reports_moves_only() {
        let mut field = FieldBuilder::new(GeoPoint::try_new(-122.42, 37.77).unwrap())
            .with_name("Dolores Park")
            .build();

        assert!(!field.apply_patch(&FieldPatch::new().with_notes("lights until 10pm")));
        assert_eq!(field.attributes().notes, "lights until 10pm");

        let same_spot = FieldPatch::new().with_location(GeoPoint::try_new(-122.42, 37.77).unwrap());
        assert!(!field.apply_patch(&same_spot));

        let moved = FieldPatch::new().with_location(GeoPoint::try_new(0.0, 0.0).unwrap());
        assert!(field.apply_patch(&moved));
        assert_eq!(field.location(), GeoPoint::from_raw(0.0, 0.0));
        assert_eq!(field.name(), "Dolores Park");
    }
}
