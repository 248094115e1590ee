// crates/shared-kernel/src/infrastructure/redis/mappers/redis_error_mapper.rs

use crate::errors::DomainError;

pub trait FredErrorExt<T> {
    fn map_index(self, context: &'static str) -> Result<T, DomainError>;
}

impl<T> FredErrorExt<T> for std::result::Result<T, fred::error::Error> {
    fn map_index(self, context: &'static str) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::IndexWrite(format!("{}: {}", context, e)))
    }
}
