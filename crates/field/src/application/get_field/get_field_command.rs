// crates/field/src/application/get_field/get_field_command.rs

use crate::domain::value_objects::FieldId;

pub struct GetFieldCommand {
    pub field_id: FieldId,
}
