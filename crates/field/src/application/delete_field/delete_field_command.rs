// crates/field/src/application/delete_field/delete_field_command.rs

use crate::domain::value_objects::FieldId;

pub struct DeleteFieldCommand {
    pub field_id: FieldId,
}
