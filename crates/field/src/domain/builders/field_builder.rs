// crates/field/src/domain/builders/field_builder.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::value_objects::GeoPoint;
use crate::domain::entities::Field;
use crate::domain::value_objects::{Address, FieldAttributes, FieldId};

pub struct FieldBuilder {
    id: FieldId,
    location: GeoPoint,
    attributes: FieldAttributes,
    created_at: DateTime<Utc>,
}

impl FieldBuilder {
    /// CHEMIN 1 : CRÉATION (l'id est attribué ici, jamais par l'appelant)
    pub fn new(location: GeoPoint) -> Self {
        Self {
            id: FieldId::new(),
            location,
            attributes: FieldAttributes::default(),
            created_at: Utc::now(),
        }
    }

    /// CHEMIN 2 : RESTAURATION depuis le store
    pub fn restore(
        id: FieldId,
        location: GeoPoint,
        attributes: FieldAttributes,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Field {
        Field::restore(id, location, attributes, created_at, updated_at)
    }

    // --- SETTERS ---

    pub fn with_attributes(mut self, attributes: FieldAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.attributes.name = name.into();
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.attributes.owner = owner.into();
        self
    }

    pub fn with_sports(mut self, sports: Vec<String>) -> Self {
        self.attributes.sports = sports;
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.attributes.address = address;
        self
    }

    pub fn with_visibility(mut self, is_public: bool) -> Self {
        self.attributes.is_public = is_public;
        self
    }

    pub fn build(self) -> Field {
        Field::new_from_builder(self.id, self.location, self.attributes, self.created_at)
    }
}
