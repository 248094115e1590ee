// crates/field/src/application/create_field/create_field_command.rs

use serde::Deserialize;
use shared_kernel::domain::value_objects::GeoJsonPoint;
use crate::domain::value_objects::FieldAttributes;

/// Corps de création : attributs à plat + `location` GeoJSON
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFieldCommand {
    pub location: GeoJsonPoint,
    #[serde(flatten)]
    pub attributes: FieldAttributes,
}
