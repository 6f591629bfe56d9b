use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Role;

/// Token claims model (transport-agnostic).
///
/// This is the minimal set of claims the backend expects once a token has
/// been decoded/verified by the signing layer. Timestamps are NumericDate
/// seconds, matching the JWT registered claim names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the bound username.
    pub sub: String,

    /// Role granted at issue time. Informational only: the guard re-fetches
    /// the account to get the current role.
    pub role: Role,

    /// Issued-at (seconds since epoch).
    pub iat: i64,

    /// Expiration (seconds since epoch).
    pub exp: i64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (iat is in the future)")]
    NotYetValid,

    #[error("invalid token time window (exp <= iat)")]
    InvalidTimeWindow,
}

/// Deterministically validate token claims against a clock.
///
/// Note: this validates the *claims* only. Signature verification and
/// decoding live in the token service.
pub fn validate_claims(
    claims: &TokenClaims,
    now: DateTime<Utc>,
) -> Result<(), TokenValidationError> {
    let now = now.timestamp();
    if claims.exp <= claims.iat {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now < claims.iat {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= claims.exp {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}
