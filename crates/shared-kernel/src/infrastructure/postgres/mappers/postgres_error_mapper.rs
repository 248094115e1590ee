// crates/shared-kernel/src/infrastructure/postgres/mappers/postgres_error_mapper.rs

use crate::errors::DomainError;

pub trait SqlxErrorExt<T> {
    fn map_store(self, context: &'static str) -> Result<T, DomainError>;
}

impl<T> SqlxErrorExt<T> for std::result::Result<T, sqlx::Error> {
    /// Toute erreur sqlx devient une erreur de store, contexte en préfixe.
    /// Pas de retry ici : l'appelant décide.
    fn map_store(self, context: &'static str) -> Result<T, DomainError> {
        self.map_err(|e| match e {
            sqlx::Error::Database(db_err) => {
                DomainError::Store(format!("{}: {}", context, db_err.message()))
            }
            other => DomainError::Store(format!("{}: {}", context, other)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_store_prefixes_context() {
        let res: Result<(), sqlx::Error> = Err(sqlx::Error::PoolTimedOut);
        let err = res.map_store("FieldInsert").unwrap_err();

        match err {
            DomainError::Store(msg) => assert!(msg.starts_with("FieldInsert: ")),
            other => panic!("Unexpected error: {other:?}"),
        }
    }
}
