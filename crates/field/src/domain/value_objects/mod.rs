mod field_attributes;
mod field_id;

pub use field_attributes::{Address, FieldAttributes};
pub use field_id::FieldId;
