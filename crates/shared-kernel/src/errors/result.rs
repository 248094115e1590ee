use crate::errors::{AppError, DomainError};

/// RESULT DU DOMAINE (Interne)
/// Utilisé par : Value objects, Coordinateur géo, Use Cases, Repositories (Ports).
/// Il force le développeur à traduire les erreurs techniques en erreurs métier.
pub type Result<T> = std::result::Result<T, DomainError>;

/// RESULT D'APPLICATION (Exécutable)
/// Utilisé par : bootstrap, factories d'infrastructure, couche de transport.
pub type AppResult<T> = std::result::Result<T, AppError>;
