mod field_repository_stub;
mod location_index_stub;

pub use field_repository_stub::FieldRepositoryStub;
pub use location_index_stub::LocationIndexStub;
