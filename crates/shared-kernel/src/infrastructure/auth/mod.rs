mod bearer;
mod token_claims;

pub use bearer::extract_bearer;
pub use token_claims::{encode_token, TokenClaims, TokenDecoder};
