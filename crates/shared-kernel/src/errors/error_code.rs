// crates/shared-kernel/src/errors/error_code.rs
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationFailed,
    InvalidCoordinate,
    InvalidRadius,
    NotFound,
    Unauthorized,
    InternalError,
    InfrastructureFailure,
    ServiceUnavailable,
}

impl ErrorCode {
    /// Classement côté appelant : erreur client, ressource absente ou erreur serveur
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::ValidationFailed | Self::InvalidCoordinate | Self::InvalidRadius | Self::Unauthorized
        )
    }

    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::InternalError | Self::InfrastructureFailure | Self::ServiceUnavailable
        )
    }
}
