mod field_builder;

pub use field_builder::FieldBuilder;
