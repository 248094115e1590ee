mod postgres_field_repository;

pub use postgres_field_repository::PostgresFieldRepository;
