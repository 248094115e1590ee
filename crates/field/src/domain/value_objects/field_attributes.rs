// crates/field/src/domain/value_objects/field_attributes.rs

use serde::{Deserialize, Serialize};

/// Adresse postale du terrain, aplatie dans le document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub city: String,
    pub state: String,
    pub country: String,
}

/// Attributs descriptifs d'un terrain. Charge inerte pour la recherche géo :
/// seul `location` (porté par l'entité) est interprété.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldAttributes {
    pub owner: String,
    pub name: String,
    pub notes: String,
    pub sports: Vec<String>,
    pub images: Vec<String>,
    #[serde(flatten)]
    pub address: Address,
    pub ownership: String,
    pub is_public: bool,
}

impl FieldAttributes {
    /// Noms (sérialisés) des attributs filtrables du document
    pub const FILTERABLE: &'static [&'static str] = &[
        "owner", "name", "notes", "sports", "images",
        "city", "state", "country", "ownership", "isPublic",
    ];

    pub fn is_filterable(attribute: &str) -> bool {
        Self::FILTERABLE.contains(&attribute)
    }
}
