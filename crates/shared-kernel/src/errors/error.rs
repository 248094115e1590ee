// crates/shared-kernel/src/errors/error.rs

use thiserror::Error;
use crate::errors::AppError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String
    },

    /// Longitude / latitude hors bornes ou non finie
    #[error("Invalid coordinate for '{axis}': {reason}")]
    InvalidCoordinate {
        axis: &'static str,
        reason: String
    },

    /// Rayon de recherche <= 0 ou non fini
    #[error("Invalid search radius: {radius}")]
    InvalidRadius {
        radius: f64
    },

    #[error("{entity} not found with id '{id}'")]
    NotFound {
        entity: &'static str,
        id: String
    },

    /// Échec I/O de l'index de localisation (Redis GEO)
    #[error("Location index failure: {0}")]
    IndexWrite(String),

    /// Échec I/O du store principal (Postgres)
    #[error("Primary store failure: {0}")]
    Store(String),

    /// Jeton signé illisible, mal signé ou de forme inattendue
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Internal domain error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Erreurs imputables à l'appelant (entrée invalide), jamais à l'infrastructure
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::InvalidCoordinate { .. }
                | Self::InvalidRadius { .. }
                | Self::InvalidToken(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<AppError> for DomainError {
    fn from(err: AppError) -> Self {
        match err.code {
            crate::errors::ErrorCode::NotFound => DomainError::NotFound {
                entity: "Resource",
                id: "unknown".into()
            },
            _ => DomainError::Internal(err.message),
        }
    }
}
