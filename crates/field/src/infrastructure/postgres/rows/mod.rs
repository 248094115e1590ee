mod postgres_field_row;

pub(crate) use postgres_field_row::FIELD_COLUMNS;
pub use postgres_field_row::PostgresFieldRow;
