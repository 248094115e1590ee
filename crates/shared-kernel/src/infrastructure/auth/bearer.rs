// crates/shared-kernel/src/infrastructure/auth/bearer.rs

use crate::errors::{DomainError, Result};

const BEARER_PREFIX: &str = "Bearer ";

/// Extrait le jeton d'un en-tête `Authorization: Bearer <token>`
pub fn extract_bearer(header: &str) -> Result<&str> {
    let token = header
        .trim()
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .unwrap_or_default();

    if token.is_empty() {
        return Err(DomainError::InvalidToken(
            "Authorization header must be 'Bearer <token>'".to_string(),
        ));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_token() {
        assert_eq!(extract_bearer("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert_eq!(extract_bearer("  Bearer   abc  ").unwrap(), "abc");
    }

    #[test]
    fn test_rejects_missing_or_empty_token() {
        for header in ["", "Bearer", "Bearer   ", "Basic dXNlcjpwYXNz", "abc"] {
            assert!(
                matches!(extract_bearer(header), Err(DomainError::InvalidToken(_))),
                "'{header}' devrait être refusé"
            );
        }
    }
}
