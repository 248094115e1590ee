// crates/shared-kernel/src/errors/mod.rs

mod app_error;
mod error;
mod error_code;
mod result;

pub use app_error::AppError;
pub use error::DomainError;
pub use error_code::ErrorCode;
pub use result::{AppResult, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_errors_map_to_client_codes() {
        let err: AppError = DomainError::InvalidCoordinate {
            axis: "longitude",
            reason: "out of range".into(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::InvalidCoordinate);
        assert!(err.code.is_client_error());

        let err: AppError = DomainError::InvalidRadius { radius: -1.0 }.into();
        assert_eq!(err.code, ErrorCode::InvalidRadius);
        assert!(err.code.is_client_error());
    }

    #[test]
    fn test_io_errors_are_masked_server_errors() {
        let err: AppError = DomainError::Store("connection reset by peer".into()).into();
        assert!(err.code.is_server_error());
        assert!(!err.message.contains("connection reset"));

        let err: AppError = DomainError::IndexWrite("READONLY".into()).into();
        assert_eq!(err.code, ErrorCode::InfrastructureFailure);
    }

    #[test]
    fn test_not_found_keeps_identifier() {
        let err: AppError = DomainError::NotFound { entity: "Field", id: "abc".into() }.into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(err.message.contains("abc"));
        assert!(!err.code.is_client_error() && !err.code.is_server_error());
    }
}
