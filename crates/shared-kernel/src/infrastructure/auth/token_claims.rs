// crates/shared-kernel/src/infrastructure/auth/token_claims.rs

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Deserializer, Serialize};
use crate::errors::{DomainError, Result};

/// Claims portés par les jetons de session.
/// Les noms sérialisés (`uuid`, `createdAt`) sont ceux déjà émis par l'émetteur.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(rename = "uuid")]
    pub subject: String,
    pub provider: String,
    /// Émis en RFC 3339 ; les anciens jetons portent des secondes Unix (texte ou nombre)
    #[serde(rename = "createdAt", deserialize_with = "deserialize_issued_at")]
    pub issued_at: DateTime<Utc>,
}

fn deserialize_issued_at<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawIssuedAt {
        Seconds(i64),
        Text(String),
    }

    let seconds = match RawIssuedAt::deserialize(deserializer)? {
        RawIssuedAt::Seconds(secs) => secs,
        RawIssuedAt::Text(text) => {
            if let Ok(date) = DateTime::parse_from_rfc3339(text.trim()) {
                return Ok(date.with_timezone(&Utc));
            }
            text.trim().parse::<i64>().map_err(|_| {
                serde::de::Error::custom(format!("createdAt '{text}' is neither RFC 3339 nor Unix seconds"))
            })?
        }
    };

    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| serde::de::Error::custom(format!("createdAt {seconds} is out of range")))
}

/// Décodeur HS256 à secret partagé.
#[derive(Clone)]
pub struct TokenDecoder {
    key: DecodingKey,
    validation: Validation,
}

impl TokenDecoder {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Les jetons émis ne portent pas d'exp
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn decode(&self, token: &str) -> Result<TokenClaims> {
        decode::<TokenClaims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| DomainError::InvalidToken(e.to_string()))
    }
}

pub fn encode_token(claims: &TokenClaims, secret: &str) -> Result<String> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| DomainError::Internal(format!("Token encoding failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-for-testing-purposes-only";

    fn claims() -> TokenClaims {
        TokenClaims {
            subject: "0190d6c4-6a1e-7c3b-9f1e-2b8d4a6f0c11".into(),
            provider: "google".into(),
            issued_at: DateTime::parse_from_rfc3339("2024-03-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    #[test]
    fn test_decode_valid_token() {
        let token = encode_token(&claims(), SECRET).unwrap();
        let decoded = TokenDecoder::new(SECRET).decode(&token).unwrap();

        assert_eq!(decoded, claims());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = encode_token(&claims(), SECRET).unwrap();
        let result = TokenDecoder::new("another-secret").decode(&token);

        assert!(matches!(result, Err(DomainError::InvalidToken(_))));
    }

    #[test]
    fn test_unexpected_shape_is_rejected() {
        #[derive(Serialize)]
        struct Other {
            sub: String,
        }

        let token = encode(
            &Header::new(Algorithm::HS256),
            &Other { sub: "x".into() },
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let result = TokenDecoder::new(SECRET).decode(&token);
        assert!(matches!(result, Err(DomainError::InvalidToken(_))));
    }

    fn sign(payload: serde_json::Value) -> String {
        encode(&Header::new(Algorithm::HS256), &payload, &EncodingKey::from_secret(SECRET.as_bytes())).unwrap()
    }

    #[test]
    fn test_created_at_accepts_unix_seconds() {
        let expected = DateTime::from_timestamp(1_709_287_200, 0).unwrap();

        for created_at in [serde_json::json!("1709287200"), serde_json::json!(1_709_287_200)] {
            let token = sign(serde_json::json!({ "uuid": "u-1", "provider": "apple", "createdAt": created_at }));
            let decoded = TokenDecoder::new(SECRET).decode(&token).unwrap();
            assert_eq!(decoded.issued_at, expected);
        }

        let token = sign(serde_json::json!({ "uuid": "u-1", "provider": "apple", "createdAt": "yesterday" }));
        assert!(matches!(TokenDecoder::new(SECRET).decode(&token), Err(DomainError::InvalidToken(_))));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let result = TokenDecoder::new(SECRET).decode("not.a.token");
        assert!(matches!(result, Err(DomainError::InvalidToken(_))));
    }
}
