mod field_repository;
mod location_index;

pub use field_repository::FieldRepository;
pub use location_index::{ensure_indexable, LocationIndex, MAX_INDEXABLE_LATITUDE};
