// crates/field/src/domain/params/field_patch.rs

use serde_json::{Map, Value};
use shared_kernel::domain::value_objects::GeoPoint;
use crate::domain::value_objects::FieldAttributes;

/// Modification partielle d'un terrain : `None` = inchangé.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldPatch {
    pub owner: Option<String>,
    pub name: Option<String>,
    pub notes: Option<String>,
    pub sports: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub ownership: Option<String>,
    pub is_public: Option<bool>,
    pub location: Option<GeoPoint>,
}

impl FieldPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_sports(mut self, sports: Vec<String>) -> Self {
        self.sports = Some(sports);
        self
    }

    pub fn with_visibility(mut self, is_public: bool) -> Self {
        self.is_public = Some(is_public);
        self
    }

    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.location.is_none() && self.to_document().is_empty()
    }

    /// Sous-document JSON des attributs fournis, clés identiques au document stocké
    pub fn to_document(&self) -> Map<String, Value> {
        let mut doc = Map::new();

        let mut set = |key: &str, value: Option<Value>| {
            if let Some(v) = value {
                doc.insert(key.to_string(), v);
            }
        };

        set("owner", self.owner.clone().map(Value::from));
        set("name", self.name.clone().map(Value::from));
        set("notes", self.notes.clone().map(Value::from));
        set("sports", self.sports.clone().map(Value::from));
        set("images", self.images.clone().map(Value::from));
        set("city", self.city.clone().map(Value::from));
        set("state", self.state.clone().map(Value::from));
        set("country", self.country.clone().map(Value::from));
        set("ownership", self.ownership.clone().map(Value::from));
        set("isPublic", self.is_public.map(Value::from));

        doc
    }

    /// Application en mémoire, même sémantique que le merge JSONB côté Postgres
    pub fn apply_to(&self, attributes: &mut FieldAttributes) {
        if let Some(v) = &self.owner { attributes.owner = v.clone(); }
        if let Some(v) = &self.name { attributes.name = v.clone(); }
        if let Some(v) = &self.notes { attributes.notes = v.clone(); }
        if let Some(v) = &self.sports { attributes.sports = v.clone(); }
        if let Some(v) = &self.images { attributes.images = v.clone(); }
        if let Some(v) = &self.city { attributes.address.city = v.clone(); }
        if let Some(v) = &self.state { attributes.address.state = v.clone(); }
        if let Some(v) = &self.country { attributes.address.country = v.clone(); }
        if let Some(v) = &self.ownership { attributes.ownership = v.clone(); }
        if let Some(v) = self.is_public { attributes.is_public = v; }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_patch() {
        assert!(FieldPatch::new().is_empty());
        assert!(!FieldPatch::new().with_visibility(false).is_empty());
        assert!(!FieldPatch::new().with_location(GeoPoint::from_raw(0.0, 0.0)).is_empty());
    }

    #[test]
    fn test_document_only_contains_provided_keys() {
        let patch = FieldPatch::new().with_name("Court 4").with_visibility(true);
        let doc = patch.to_document();

        assert_eq!(doc.len(), 2);
        assert_eq!(doc["name"], "Court 4");
        assert_eq!(doc["isPublic"], true);
    }

    #[test]
    fn test_apply_keeps_untouched_attributes() {
        let mut attrs = FieldAttributes {
            name: "Old".into(),
            notes: "keep me".into(),
            ..Default::default()
        };
        attrs.address.city = "Paris".into();

        let patch = FieldPatch { city: Some("Lyon".into()), ..FieldPatch::new().with_name("New") };
        patch.apply_to(&mut attrs);

        assert_eq!(attrs.name, "New");
        assert_eq!(attrs.notes, "keep me");
        assert_eq!(attrs.address.city, "Lyon");
    }
}
