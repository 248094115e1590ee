// crates/field/src/application/geo_search/search_result.rs

use crate::domain::entities::Field;
use crate::domain::value_objects::FieldId;

/// Sortie de `search_nearby` : des ids à résoudre (mode index)
/// ou des documents déjà matérialisés (mode natif).
#[derive(Debug, Clone, PartialEq)]
pub enum NearbyCandidates {
    Ids(Vec<FieldId>),
    Documents(Vec<Field>),
}

impl NearbyCandidates {
    pub fn len(&self) -> usize {
        match self {
            Self::Ids(ids) => ids.len(),
            Self::Documents(docs) => docs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Terrains du plus proche au plus lointain, sans doublon
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    pub fields: Vec<Field>,
    pub total_count: usize,
}

impl SearchResult {
    pub(crate) fn from_fields(fields: Vec<Field>) -> Self {
        Self { total_count: fields.len(), fields }
    }
}
