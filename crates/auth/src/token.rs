//! Token service: issues and validates signed, time-bounded tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::claims::{TokenClaims, validate_claims};
use crate::Role;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("failed to sign token")]
    Signing,

    /// Signature invalid, malformed, or expiry elapsed. Causes are not
    /// distinguished to callers.
    #[error("invalid token")]
    Invalid,
}

/// Stateless token issue/validate contract.
///
/// Tokens carry their own expiry; clock-based expiry is the only
/// invalidation mechanism (no server-side revocation list).
pub trait TokenService: Send + Sync {
    fn issue(&self, username: &str, role: Role) -> Result<String, TokenError>;

    fn validate(&self, token: &str) -> Result<TokenClaims, TokenError>;
}

/// HS256 JWT implementation.
pub struct Hs256TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl Hs256TokenService {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }
}

impl TokenService for Hs256TokenService {
    fn issue(&self, username: &str, role: Role) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: username.to_string(),
            role,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|_| TokenError::Signing)
    }

    fn validate(&self, token: &str) -> Result<TokenClaims, TokenError> {
        // Expiry is checked by `validate_claims` with zero leeway; disable the
        // decoder's own exp handling so the clock check lives in one place.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let data = jsonwebtoken::decode::<TokenClaims>(token, &self.decoding, &validation)
            .map_err(|_| TokenError::Invalid)?;

        validate_claims(&data.claims, Utc::now()).map_err(|_| TokenError::Invalid)?;

        Ok(data.claims)
    }
}
