// crates/field/src/application/update_field/update_field_command.rs

use crate::domain::params::FieldPatch;
use crate::domain::value_objects::FieldId;

pub struct UpdateFieldCommand {
    pub field_id: FieldId,
    pub patch: FieldPatch,
}
