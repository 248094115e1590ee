use crate::errors::{DomainError, ErrorCode};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Serialize, Clone)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        match error {
            // 1. Document absent (404)
            DomainError::NotFound { entity, id } => Self::new(
                ErrorCode::NotFound,
                format!("{entity} with id '{id}' not found"),
            ),

            // 2. Validation (400)
            DomainError::Validation { field, reason } => Self {
                code: ErrorCode::ValidationFailed,
                message: format!("Validation failed for {field}"),
                details: Some(serde_json::json!({ "field": field, "reason": reason })),
            },

            DomainError::InvalidCoordinate { axis, reason } => Self {
                code: ErrorCode::InvalidCoordinate,
                message: format!("Invalid coordinate for {axis}"),
                details: Some(serde_json::json!({ "field": axis, "reason": reason })),
            },

            DomainError::InvalidRadius { radius } => Self {
                code: ErrorCode::InvalidRadius,
                message: "Search radius must be a positive number of miles".to_string(),
                details: Some(serde_json::json!({ "radius": radius })),
            },

            // 3. Jeton invalide (401)
            DomainError::InvalidToken(reason) => Self::new(ErrorCode::Unauthorized, reason),

            // 4. Erreurs techniques (500), on masque le détail au client
            DomainError::IndexWrite(_) | DomainError::Store(_) => Self::new(
                ErrorCode::InfrastructureFailure,
                "A storage error occurred. Please try again later.",
            ),

            DomainError::Internal(_) => Self::new(
                ErrorCode::InternalError,
                "An unexpected error occurred. Please try again later.",
            ),
        }
    }
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        // En interne, on log l'erreur réelle pour le debugging
        tracing::error!(error = ?err, "Database infrastructure error");

        Self::new(ErrorCode::InfrastructureFailure, "A database error occurred")
    }
}

#[cfg(feature = "redis")]
impl From<fred::error::Error> for AppError {
    fn from(err: fred::error::Error) -> Self {
        tracing::error!(error = ?err, "Redis infrastructure error");

        Self::new(ErrorCode::InfrastructureFailure, format!("Location index error: {}", err))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
